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

//! Display-ready view-models.
//!
//! Everything here is derived from a [`crate::TokenReport`] and holds either a
//! concrete value or an explicit "unavailable" marker. They are rebuilt on every
//! fetch and are serializable so any rendering surface can consume them.

use crate::report::Headline;
use serde::Serialize;

/// One labelled row of a metric panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
  pub label: &'static str,
  pub value: String,
}

/// Ordered label/value rows for one data group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricPanel {
  pub rows: Vec<MetricRow>,
}

impl MetricPanel {
  /// Formatted value of the row with the given label
  pub fn get(&self, label: &str) -> Option<&str> {
    self.rows.iter().find(|row| row.label == label).map(|row| row.value.as_str())
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

/// A pie (or donut) slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
  pub label: &'static str,
  pub value: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<&'static str>,
}

/// Slices of one pie chart, in drawing order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieSeries {
  pub slices: Vec<PieSlice>,
}

impl PieSeries {
  pub fn total(&self) -> f64 {
    self.slices.iter().map(|s| s.value).sum()
  }

  /// Each slice's share of the total, in percent; all zero when the total is zero
  pub fn shares(&self) -> Vec<(&'static str, f64)> {
    let total = self.total();
    self
      .slices
      .iter()
      .map(|s| (s.label, if total > 0.0 { s.value / total * 100.0 } else { 0.0 }))
      .collect()
  }

  pub fn labels(&self) -> Vec<&'static str> {
    self.slices.iter().map(|s| s.label).collect()
  }
}

/// One bar of a categorical bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
  pub category: &'static str,
  pub value: f64,
  pub color: &'static str,
}

/// Bars over a fixed category set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarSeries {
  pub bars: Vec<Bar>,
}

impl BarSeries {
  /// The same data as a pie, sharing labels and colors. Zero bars are kept.
  pub fn to_pie(&self) -> PieSeries {
    PieSeries {
      slices: self
        .bars
        .iter()
        .map(|b| PieSlice { label: b.category, value: b.value, color: Some(b.color) })
        .collect(),
    }
  }

  pub fn max_value(&self) -> f64 {
    self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
  }
}

/// Every view-model derived from one token report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
  /// Token name for headings, or the unavailable marker
  pub display_name: String,
  pub basic_info: MetricPanel,
  pub tokenomics: MetricPanel,
  pub utility: MetricPanel,
  /// `None` when the report lacks the data to draw a meaningful chart
  pub supply_distribution: Option<PieSeries>,
  pub sentiment: BarSeries,
  pub headlines: Vec<Headline>,
  pub overall_score: String,
}
