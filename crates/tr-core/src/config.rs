/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the token report client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use url::Url;

/// Main configuration struct for the token report client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the token report service
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for transient failures
  pub max_retries: u32,

  /// Delay before the first retry; doubled on each further attempt
  pub retry_delay_ms: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a config from an arbitrary key lookup.
  ///
  /// Unset keys fall back to their defaults; set but unparseable keys are an error.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = lookup("TR_BASE_URL").unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());
    Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid TR_BASE_URL '{}': {}", base_url, e)))?;

    let timeout_secs = parse_or(&lookup, "TR_TIMEOUT_SECS", crate::DEFAULT_TIMEOUT_SECS)?;
    let max_retries = parse_or(&lookup, "TR_MAX_RETRIES", crate::DEFAULT_MAX_RETRIES)?;
    let retry_delay_ms = parse_or(&lookup, "TR_RETRY_DELAY_MS", crate::DEFAULT_RETRY_DELAY_MS)?;

    Ok(Config { base_url, timeout_secs, max_retries, retry_delay_ms })
  }

  /// Create a config with default values against the given service (for testing)
  pub fn default_for(base_url: impl Into<String>) -> Self {
    Config {
      base_url: base_url.into(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
      retry_delay_ms: crate::DEFAULT_RETRY_DELAY_MS,
    }
  }

  /// Replace the base URL, validating it first
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
    let base_url = base_url.into();
    Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
    self.base_url = base_url;
    Ok(self)
  }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(key) {
    Some(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", key))),
    None => Ok(default),
  }
}
