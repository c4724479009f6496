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

//! Plain-terminal rendering of a [`Dashboard`].
//!
//! Sections appear in the same order as the web dashboard; in comparison mode
//! every section lists each token in turn.

use crate::dashboard::{Dashboard, Subject};
use colored::Colorize;
use std::fmt::Write;
use tr_models::{BarSeries, MetricPanel, PieSeries};
use tr_normalizer::format::format_count;

const BAR_WIDTH: usize = 30;
const SUPPLY_TITLE: &str = "Token Supply Distribution";
const SUPPLY_UNAVAILABLE: &str = "Insufficient data to display supply distribution";

/// Render the whole dashboard as terminal text
pub fn render_dashboard(dashboard: &Dashboard) -> String {
  let mut out = String::new();
  let subjects = dashboard.subjects();
  let compare = dashboard.is_comparison();

  heading(&mut out, "Token Analysis");

  section(&mut out, "Basic Information", &subjects, compare, |out, s| panel(out, &s.view.basic_info));
  section(&mut out, "Tokenomics", &subjects, compare, |out, s| panel(out, &s.view.tokenomics));
  section(&mut out, "Supply Distribution", &subjects, compare, |out, s| {
    supply(out, s.view.supply_distribution.as_ref())
  });
  section(&mut out, "Sentiment Analysis", &subjects, compare, |out, s| sentiment(out, &s.view.sentiment));
  section(&mut out, "Token Utility", &subjects, compare, |out, s| panel(out, &s.view.utility));

  subheading(&mut out, "Recent News Headlines");
  for subject in &subjects {
    if compare {
      let _ = writeln!(out, "News for {}:", subject.view.display_name);
    }
    headlines(&mut out, subject);
  }
  out.push('\n');

  subheading(&mut out, "Overall Score");
  for subject in &subjects {
    let label = if compare { format!("{} Score", subject.view.display_name) } else { "Score".to_string() };
    let _ = writeln!(out, "{}: {}", label.bold(), subject.view.overall_score);
  }

  out
}

/// Success line shown once a token has been fetched
pub fn fetched_message(subject: &Subject, ordinal: Option<&str>) -> String {
  let prefix = match ordinal {
    Some(which) => format!("{} token data", which),
    None => "Data".to_string(),
  };
  format!("{} fetched successfully in {:.2} seconds!", prefix, subject.response_secs)
}

/// Success lines for every fetched token: the primary token first, then the comparison token
pub fn fetched_messages(dashboard: &Dashboard) -> Vec<String> {
  let mut messages = vec![fetched_message(&dashboard.primary, None)];
  if let Some(second) = &dashboard.comparison {
    messages.push(fetched_message(second, Some("Second")));
  }
  messages
}

fn heading(out: &mut String, title: &str) {
  let _ = writeln!(out, "{}\n", title.bold().underline());
}

fn subheading(out: &mut String, title: &str) {
  let _ = writeln!(out, "{}", title.bold());
}

fn section<F>(out: &mut String, title: &str, subjects: &[&Subject], compare: bool, body: F)
where
  F: Fn(&mut String, &Subject),
{
  subheading(out, title);
  for subject in subjects {
    if compare {
      let _ = writeln!(out, "[{}]", subject.view.display_name.cyan());
    }
    body(out, subject);
  }
  out.push('\n');
}

fn panel(out: &mut String, panel: &MetricPanel) {
  for row in &panel.rows {
    let _ = writeln!(out, "  {}: {}", row.label.bold(), row.value);
  }
}

fn supply(out: &mut String, series: Option<&PieSeries>) {
  let Some(series) = series else {
    let _ = writeln!(out, "  {}", SUPPLY_UNAVAILABLE.italic());
    return;
  };

  let _ = writeln!(out, "  {}", SUPPLY_TITLE);
  for (slice, (_, share)) in series.slices.iter().zip(series.shares()) {
    let _ = writeln!(out, "  {:<20} {:>26} ({:.1}%)", slice.label, format_count(slice.value), share);
  }
}

fn sentiment(out: &mut String, series: &BarSeries) {
  let max = series.max_value();
  for bar in &series.bars {
    let width = if max > 0.0 { (bar.value / max * BAR_WIDTH as f64).round() as usize } else { 0 };
    let (r, g, b) = hex_rgb(bar.color).unwrap_or((255, 255, 255));
    let _ = writeln!(
      out,
      "  {:<16} {:>8.2} {}",
      bar.category,
      bar.value,
      "█".repeat(width).truecolor(r, g, b)
    );
  }

  let shares: Vec<String> = series
    .to_pie()
    .shares()
    .into_iter()
    .map(|(label, share)| format!("{} {:.1}%", label, share))
    .collect();
  let _ = writeln!(out, "  Share: {}", shares.join(" | "));
}

fn headlines(out: &mut String, subject: &Subject) {
  if subject.view.headlines.is_empty() {
    let _ = writeln!(out, "  {}", "No recent headlines".italic());
    return;
  }
  for headline in &subject.view.headlines {
    let _ = writeln!(out, "- {} ({})", headline.title, headline.url.underline());
  }
}

/// Parse `#RRGGBB`
fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
  let hex = color.strip_prefix('#')?;
  if hex.len() != 6 {
    return None;
  }
  let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
  Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use tr_models::TokenReport;
  use tr_normalizer::normalize;

  fn subject(name: &str, doc: serde_json::Value) -> Subject {
    Subject {
      token_name: name.to_string(),
      response_secs: 1.234,
      fetched_at: Utc::now(),
      view: normalize(&TokenReport::from_value(doc)),
    }
  }

  fn bitcoin() -> Subject {
    subject(
      "bitcoin",
      json!({
        "basic_info": {"Token Name": "Bitcoin", "Token Symbol": "btc"},
        "tokenomics_info": {"Total Supply": 1000, "Circulating Supply": 600},
        "utility_info": {"Tokens Locked": 100, "Staking Ratio": 0.1534},
        "sentiment_data": {"news_score": 2.0, "insta_score": 1.0},
        "headlines": [["Bitcoin up", "https://news.example/btc"]],
        "overall_score": 7.5
      }),
    )
  }

  fn plain(dashboard: &Dashboard) -> String {
    colored::control::set_override(false);
    render_dashboard(dashboard)
  }

  #[test]
  fn test_single_token_sections() {
    let dashboard = Dashboard { primary: bitcoin(), comparison: None, comparison_failure: None };
    let text = plain(&dashboard);

    for title in [
      "Basic Information",
      "Tokenomics",
      "Supply Distribution",
      "Sentiment Analysis",
      "Token Utility",
      "Recent News Headlines",
      "Overall Score",
    ] {
      assert!(text.contains(title), "missing section {}", title);
    }
    assert!(text.contains("Token Symbol: btc"));
    assert!(text.contains("Staking Ratio: 15.34%"));
    assert!(text.contains("Token Supply Distribution"));
    assert!(text.contains("(60.0%)"));
    assert!(text.contains("- Bitcoin up (https://news.example/btc)"));
    assert!(text.contains("Score: 7.50"));
    assert!(!text.contains("News for"));
  }

  #[test]
  fn test_missing_supply_shows_notice() {
    let dashboard =
      Dashboard { primary: subject("x", json!({})), comparison: None, comparison_failure: None };
    let text = plain(&dashboard);

    assert!(text.contains(SUPPLY_UNAVAILABLE));
    assert!(text.contains("No recent headlines"));
    assert!(text.contains("Category: Category not found"));
  }

  #[test]
  fn test_comparison_labels_each_token() {
    let ethereum = subject("ethereum", json!({"basic_info": {"Token Name": "Ethereum"}, "overall_score": 6}));
    let dashboard = Dashboard { primary: bitcoin(), comparison: Some(ethereum), comparison_failure: None };
    let text = plain(&dashboard);

    assert!(text.contains("[Bitcoin]"));
    assert!(text.contains("[Ethereum]"));
    assert!(text.contains("News for Bitcoin:"));
    assert!(text.contains("News for Ethereum:"));
    assert!(text.contains("Bitcoin Score: 7.50"));
    assert!(text.contains("Ethereum Score: 6.00"));
  }

  #[test]
  fn test_zero_sentiment_bars_are_listed() {
    let text = plain(&Dashboard { primary: bitcoin(), comparison: None, comparison_failure: None });

    assert!(text.contains("Twitter Hashtag"));
    assert!(text.contains("Twitter Hashtag 0.0%"));
    assert!(text.contains("News 66.7%"));
  }

  #[test]
  fn test_fetched_message() {
    assert_eq!(fetched_message(&bitcoin(), None), "Data fetched successfully in 1.23 seconds!");
    assert_eq!(
      fetched_message(&bitcoin(), Some("Second")),
      "Second token data fetched successfully in 1.23 seconds!"
    );
  }

  #[test]
  fn test_fetched_messages_in_comparison_mode() {
    let ethereum = subject("ethereum", json!({}));
    let dashboard = Dashboard { primary: bitcoin(), comparison: Some(ethereum), comparison_failure: None };

    assert_eq!(
      fetched_messages(&dashboard),
      vec![
        "Data fetched successfully in 1.23 seconds!".to_string(),
        "Second token data fetched successfully in 1.23 seconds!".to_string(),
      ]
    );
  }

  #[test]
  fn test_fetched_messages_single_token() {
    let dashboard = Dashboard { primary: bitcoin(), comparison: None, comparison_failure: None };
    assert_eq!(fetched_messages(&dashboard), vec!["Data fetched successfully in 1.23 seconds!".to_string()]);
  }

  #[test]
  fn test_hex_rgb() {
    assert_eq!(hex_rgb("#636EFA"), Some((0x63, 0x6E, 0xFA)));
    assert_eq!(hex_rgb("636EFA"), None);
    assert_eq!(hex_rgb("#12345"), None);
    assert_eq!(hex_rgb("#GG0000"), None);
  }
}
