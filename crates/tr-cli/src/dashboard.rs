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

use chrono::{DateTime, Utc};
use serde::Serialize;
use tr_client::{FetchedReport, ReportSource};
use tr_core::{Error, Result};
use tr_models::TokenView;
use tr_normalizer::normalize;
use tracing::warn;

/// One fetched and normalized token
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
  pub token_name: String,
  pub response_secs: f64,
  pub fetched_at: DateTime<Utc>,
  pub view: TokenView,
}

impl From<FetchedReport> for Subject {
  fn from(fetched: FetchedReport) -> Self {
    Subject {
      response_secs: fetched.response_secs(),
      view: normalize(&fetched.report),
      token_name: fetched.token_name,
      fetched_at: fetched.fetched_at,
    }
  }
}

/// A comparison token that could not be fetched
#[derive(Debug)]
pub struct FailedFetch {
  pub token_name: String,
  pub error: Error,
}

/// Everything the dashboard shows for one run
#[derive(Debug, Serialize)]
pub struct Dashboard {
  pub primary: Subject,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comparison: Option<Subject>,
  #[serde(skip)]
  pub comparison_failure: Option<FailedFetch>,
}

impl Dashboard {
  /// Subjects in display order
  pub fn subjects(&self) -> Vec<&Subject> {
    std::iter::once(&self.primary).chain(self.comparison.as_ref()).collect()
  }

  pub fn is_comparison(&self) -> bool {
    self.comparison.is_some()
  }
}

/// Fetch the primary token and, optionally, a second one to compare against.
///
/// A failed primary fetch fails the whole dashboard. A failed comparison fetch
/// is recorded and the primary token is shown alone.
pub async fn load_dashboard(
  source: &dyn ReportSource,
  primary: &str,
  comparison: Option<&str>,
) -> Result<Dashboard> {
  let (first, second) = match comparison {
    Some(other) => {
      let (a, b) = tokio::join!(source.fetch_report(primary), source.fetch_report(other));
      (a, Some((other, b)))
    }
    None => (source.fetch_report(primary).await, None),
  };

  let primary = Subject::from(first?);

  let (comparison, comparison_failure) = match second {
    Some((_, Ok(fetched))) => (Some(Subject::from(fetched)), None),
    Some((token_name, Err(error))) => {
      warn!("comparison token {} unavailable: {}", token_name, error);
      (None, Some(FailedFetch { token_name: token_name.to_string(), error }))
    }
    None => (None, None),
  };

  Ok(Dashboard { primary, comparison, comparison_failure })
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use pretty_assertions::assert_eq;
  use serde_json::{json, Value};
  use std::collections::HashMap;
  use std::time::Duration;
  use tr_models::TokenReport;

  struct StaticSource {
    reports: HashMap<&'static str, Value>,
  }

  #[async_trait]
  impl ReportSource for StaticSource {
    async fn fetch_report(&self, token_name: &str) -> Result<FetchedReport> {
      let body = self.reports.get(token_name).cloned().ok_or(Error::Status(404))?;
      Ok(FetchedReport {
        token_name: token_name.to_string(),
        report: TokenReport::from_value(body),
        response_time: Duration::from_millis(250),
        fetched_at: Utc::now(),
      })
    }
  }

  fn source() -> StaticSource {
    let mut reports = HashMap::new();
    reports.insert("bitcoin", json!({"basic_info": {"Token Name": "Bitcoin"}}));
    reports.insert("ethereum", json!({"basic_info": {"Token Name": "Ethereum"}}));
    StaticSource { reports }
  }

  #[tokio::test]
  async fn test_single_token() {
    let dashboard = load_dashboard(&source(), "bitcoin", None).await.unwrap();

    assert_eq!(dashboard.primary.view.display_name, "Bitcoin");
    assert_eq!(dashboard.primary.response_secs, 0.25);
    assert!(!dashboard.is_comparison());
    assert!(dashboard.comparison_failure.is_none());
    assert_eq!(dashboard.subjects().len(), 1);
  }

  #[tokio::test]
  async fn test_two_tokens() {
    let dashboard = load_dashboard(&source(), "bitcoin", Some("ethereum")).await.unwrap();

    let names: Vec<_> = dashboard.subjects().iter().map(|s| s.view.display_name.clone()).collect();
    assert_eq!(names, vec!["Bitcoin", "Ethereum"]);
    assert!(dashboard.is_comparison());
  }

  #[tokio::test]
  async fn test_primary_failure_fails_dashboard() {
    let result = load_dashboard(&source(), "notacoin", Some("ethereum")).await;
    assert!(matches!(result, Err(Error::Status(404))));
  }

  #[tokio::test]
  async fn test_comparison_failure_shows_primary_alone() {
    let dashboard = load_dashboard(&source(), "bitcoin", Some("notacoin")).await.unwrap();

    assert!(!dashboard.is_comparison());
    let failure = dashboard.comparison_failure.unwrap();
    assert_eq!(failure.token_name, "notacoin");
    assert!(matches!(failure.error, Error::Status(404)));
  }

  #[tokio::test]
  async fn test_json_output_shape() {
    let dashboard = load_dashboard(&source(), "bitcoin", None).await.unwrap();
    let value = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(value["primary"]["token_name"], "bitcoin");
    assert_eq!(value["primary"]["view"]["overall_score"], "N/A");
    assert_eq!(value["primary"]["view"]["supply_distribution"], Value::Null);
    assert!(value.get("comparison").is_none());
  }
}
