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

//! The token report client and the source trait it implements

use crate::transport::Transport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tr_core::{Config, Error, Result};
use tr_models::TokenReport;
use tracing::{info, instrument};

/// A report as returned by the service, with request timing
#[derive(Debug, Clone)]
pub struct FetchedReport {
  /// Token name as it was requested
  pub token_name: String,
  /// Report document, mistyped fields already discarded
  pub report: TokenReport,
  /// Wall-clock time of the request, retries included
  pub response_time: Duration,
  /// When the response arrived
  pub fetched_at: DateTime<Utc>,
}

impl FetchedReport {
  /// Response time in fractional seconds
  pub fn response_secs(&self) -> f64 {
    self.response_time.as_secs_f64()
  }
}

/// Anything that can produce a token report by name.
///
/// Implement this trait to serve reports from somewhere other than the HTTP service.
#[async_trait]
pub trait ReportSource: Send + Sync {
  /// Fetch the report for one token; a non-success response is an error
  async fn fetch_report(&self, token_name: &str) -> Result<FetchedReport>;
}

/// Client for the token report service
///
/// # Examples
///
/// ```ignore
/// use tr_client::{ReportSource, TokenReportClient};
/// use tr_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TokenReportClient::new(Config::from_env()?)?;
///     let fetched = client.fetch_report("bitcoin").await?;
///     println!("fetched in {:.2}s", fetched.response_secs());
///     Ok(())
/// }
/// ```
pub struct TokenReportClient {
  transport: Transport,
}

impl TokenReportClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is unusable or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(&config)? })
  }

  /// Base URL of the report service
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

#[async_trait]
impl ReportSource for TokenReportClient {
  #[instrument(skip(self))]
  async fn fetch_report(&self, token_name: &str) -> Result<FetchedReport> {
    let token_name = token_name.trim();
    if token_name.is_empty() {
      return Err(Error::InvalidInput("token name must not be empty".to_string()));
    }

    let url = self.transport.report_url(token_name)?;
    let started = Instant::now();
    let body = self.transport.get_json(&url).await?;
    let response_time = started.elapsed();

    info!("Fetched report for {} in {:.2}s", token_name, response_time.as_secs_f64());

    Ok(FetchedReport {
      token_name: token_name.to_string(),
      report: TokenReport::from_value(body),
      response_time,
      fetched_at: Utc::now(),
    })
  }
}
