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

//! Chart series: sentiment bars and the supply distribution pie.

use std::fmt;
use tr_models::{keys, Bar, BarSeries, PieSeries, PieSlice, ReportGroup, TokenReport};
use tracing::{debug, warn};

/// Sentiment sources, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
  News,
  Instagram,
  TwitterProfile,
  TwitterHashtag,
}

impl SentimentCategory {
  pub const ALL: [SentimentCategory; 4] = [
    SentimentCategory::News,
    SentimentCategory::Instagram,
    SentimentCategory::TwitterProfile,
    SentimentCategory::TwitterHashtag,
  ];

  pub fn label(self) -> &'static str {
    match self {
      SentimentCategory::News => "News",
      SentimentCategory::Instagram => "Instagram",
      SentimentCategory::TwitterProfile => "Twitter Profile",
      SentimentCategory::TwitterHashtag => "Twitter Hashtag",
    }
  }

  /// Color used for this category in both the bar and the pie
  pub fn color(self) -> &'static str {
    match self {
      SentimentCategory::News => "#636EFA",
      SentimentCategory::Instagram => "#00CC96",
      SentimentCategory::TwitterProfile => "#EF553B",
      SentimentCategory::TwitterHashtag => "#AB63FA",
    }
  }

  /// Key in `sentiment_data`
  pub fn source_key(self) -> &'static str {
    match self {
      SentimentCategory::News => keys::NEWS_SCORE,
      SentimentCategory::Instagram => keys::INSTA_SCORE,
      SentimentCategory::TwitterProfile => keys::TWITTER_PROFILE_SCORE,
      SentimentCategory::TwitterHashtag => keys::TWITTER_HASHTAG_SCORE,
    }
  }
}

impl fmt::Display for SentimentCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Sentiment scores as four bars in fixed category order.
///
/// Missing and non-numeric scores become `0`; negative scores are kept as
/// reported. Zero bars are kept, so the series always has exactly four entries.
pub fn derive_sentiment_series(report: &TokenReport) -> BarSeries {
  let bars = SentimentCategory::ALL
    .iter()
    .map(|&category| {
      let value = report.sentiment_data.field(category.source_key()).as_number().unwrap_or(0.0);
      Bar { category: category.label(), value, color: category.color() }
    })
    .collect();

  BarSeries { bars }
}

pub const CIRCULATING_LABEL: &str = "Circulating Supply";
pub const LOCKED_LABEL: &str = "Locked Tokens";
pub const OTHER_LABEL: &str = "Other";

/// Relative tolerance below which the unallocated supply is treated as zero
pub const REMAINDER_TOLERANCE: f64 = 1e-12;

/// Supply split into circulating, locked and other tokens.
///
/// Returns `None` unless `Circulating Supply` is a positive number: an all-zero
/// pie carries no information and must not be drawn. Slices with a zero value
/// are left out; the remaining ones keep the circulating, locked, other order.
pub fn derive_supply_distribution(report: &TokenReport) -> Option<PieSeries> {
  let circulating = supply_amount(report.tokenomics_info.circulating_supply);
  if circulating <= 0.0 {
    debug!("circulating supply unavailable; supply distribution not renderable");
    return None;
  }

  let total = supply_amount(report.tokenomics_info.total_supply);
  let locked = supply_amount(report.utility_info.tokens_locked);
  let other = unallocated_supply(total, circulating, locked);

  let slices = [(CIRCULATING_LABEL, circulating), (LOCKED_LABEL, locked), (OTHER_LABEL, other)]
    .into_iter()
    .filter(|&(_, value)| value > 0.0)
    .map(|(label, value)| PieSlice { label, value, color: None })
    .collect();

  Some(PieSeries { slices })
}

/// Supply that is neither circulating nor locked: `max(0, total - circulating - locked)`.
///
/// Clamped at zero when the reported total is smaller than circulating plus
/// locked; the "Other" slice then disappears from the chart. Rounding residue
/// within [`REMAINDER_TOLERANCE`] of the total also counts as zero.
pub fn unallocated_supply(total: f64, circulating: f64, locked: f64) -> f64 {
  let remainder = total - circulating - locked;
  if remainder.abs() <= total.abs() * REMAINDER_TOLERANCE {
    return 0.0;
  }
  if remainder > 0.0 {
    return remainder;
  }

  if total > 0.0 {
    warn!(
      "total supply {} is below circulating {} + locked {}; clamping other supply to 0",
      total, circulating, locked
    );
  }
  0.0
}

// Supply counts are non-negative; absent or negative reads as 0
fn supply_amount(value: Option<f64>) -> f64 {
  value.unwrap_or(0.0).max(0.0)
}
