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

use anyhow::{Context, Result};
use tr_core::Config as CoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
  pub client_config: CoreConfig,
}

impl Config {
  /// Environment settings, with an optional base URL taken from the command line
  pub fn from_env(base_url: Option<&str>) -> Result<Self> {
    let client_config = CoreConfig::from_env().context("Invalid report service configuration")?;
    Self::with_override(client_config, base_url)
  }

  fn with_override(client_config: CoreConfig, base_url: Option<&str>) -> Result<Self> {
    let client_config = match base_url {
      Some(url) => client_config
        .with_base_url(url)
        .with_context(|| format!("Invalid --base-url value: {}", url))?,
      None => client_config,
    };

    Ok(Self { client_config })
  }
}
