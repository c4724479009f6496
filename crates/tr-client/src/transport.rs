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

//! HTTP transport layer for token report requests

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tr_core::{Config, Error, Result};
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the token report service
pub struct Transport {
  client: Client,
  base_url: Url,
  timeout: Duration,
  max_retries: u32,
  retry_delay: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let base_url = Url::parse(&config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;
    if base_url.cannot_be_a_base() {
      return Err(Error::Config(format!("Base URL cannot hold a path: {}", config.base_url)));
    }

    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("tr-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url,
      timeout: Duration::from_secs(config.timeout_secs),
      max_retries: config.max_retries,
      retry_delay: Duration::from_millis(config.retry_delay_ms),
    })
  }

  /// URL of the report endpoint for one token; the name is encoded as a single path segment
  pub fn report_url(&self, token_name: &str) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL cannot hold a path: {}", self.base_url)))?
      .pop_if_empty()
      .push(tr_core::REPORT_ENDPOINT)
      .push(token_name);
    Ok(url)
  }

  /// GET a URL and parse the body as JSON
  ///
  /// Network errors and 5xx statuses are retried with exponential backoff;
  /// any other non-success status is returned at once as [`Error::Status`].
  #[instrument(skip_all, fields(url = %url))]
  pub async fn get_json(&self, url: &Url) -> Result<Value> {
    let mut attempt = 0;

    loop {
      if attempt > 0 {
        let delay = self.backoff(attempt);
        warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      match self.make_request(url).await {
        Ok(text) => {
          debug!("Response body length: {} bytes", text.len());
          return serde_json::from_str::<Value>(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            error!("Response text (first 200 chars): {}", text.chars().take(200).collect::<String>());
            Error::Serde(e)
          });
        }
        Err(e) if e.is_transient() && attempt < self.max_retries => {
          warn!("Request failed (attempt {}): {}", attempt + 1, e);
          attempt += 1;
        }
        Err(e) => return Err(e),
      }
    }
  }

  /// Make the actual HTTP request and return the body of a successful response
  async fn make_request(&self, url: &Url) -> Result<String> {
    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Status(status.as_u16()));
    }

    debug!("Request successful with status: {}", status);
    response.text().await.map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))
  }

  fn backoff(&self, attempt: u32) -> Duration {
    self.retry_delay.saturating_mul(2_u32.saturating_pow(attempt.saturating_sub(1)))
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}
