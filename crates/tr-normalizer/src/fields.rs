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

//! Field definitions for the metric panels.

use crate::format::{format_count, format_currency, format_ratio, format_score};
use crate::{CATEGORY_NOT_FOUND, NOT_AVAILABLE};
use tr_models::{keys, FieldValue};

/// How a metric value is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFormat {
  /// Pass strings through unchanged
  Text,
  /// Rounded, thousands-grouped integer
  Count,
  /// `$` prefix, thousands-grouped, two decimals
  Currency,
  /// Fraction shown as a two-decimal percentage
  Ratio,
  /// Two decimals, no decoration
  Score,
}

impl FieldFormat {
  pub fn is_numeric(self) -> bool {
    !matches!(self, FieldFormat::Text)
  }
}

/// One row of a metric panel: where to read it, what to call it, how to show it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricField {
  pub key: &'static str,
  pub label: &'static str,
  pub format: FieldFormat,
  /// Shown when the value is absent or cannot be formatted
  pub placeholder: &'static str,
}

impl MetricField {
  pub const fn new(key: &'static str, label: &'static str, format: FieldFormat) -> Self {
    Self { key, label, format, placeholder: NOT_AVAILABLE }
  }

  pub const fn with_placeholder(self, placeholder: &'static str) -> Self {
    Self { placeholder, ..self }
  }

  /// Format a looked-up value; never fails, falls back to the placeholder
  pub fn render(&self, value: FieldValue<'_>) -> String {
    match (self.format, value) {
      (_, FieldValue::Missing) => self.placeholder.to_string(),
      (FieldFormat::Text, FieldValue::Text(text)) => text.to_string(),
      (FieldFormat::Text, FieldValue::Number(n)) => n.to_string(),
      (FieldFormat::Count, FieldValue::Number(n)) => format_count(n),
      (FieldFormat::Currency, FieldValue::Number(n)) => format_currency(n),
      (FieldFormat::Ratio, FieldValue::Number(n)) => format_ratio(n),
      (FieldFormat::Score, FieldValue::Number(n)) => format_score(n),
      (_, FieldValue::Text(_)) => self.placeholder.to_string(),
    }
  }
}

/// Basic information panel, in display order
pub const BASIC_INFO_FIELDS: [MetricField; 4] = [
  MetricField::new(keys::TOKEN_NAME, "Token Name", FieldFormat::Text),
  MetricField::new(keys::TOKEN_SYMBOL, "Token Symbol", FieldFormat::Text),
  MetricField::new(keys::WEBSITE_LINK, "Website", FieldFormat::Text),
  MetricField::new(keys::EXPLORER, "Explorer", FieldFormat::Text),
];

/// Tokenomics panel, in display order
pub const TOKENOMICS_FIELDS: [MetricField; 6] = [
  MetricField::new(keys::TOTAL_SUPPLY, "Total Supply", FieldFormat::Count),
  MetricField::new(keys::CIRCULATING_SUPPLY, "Circulating Supply", FieldFormat::Count),
  MetricField::new(keys::TOKEN_PRICE_USD, "Token Price (USD)", FieldFormat::Currency),
  MetricField::new(keys::MARKET_CAP_USD, "Market Cap (USD)", FieldFormat::Currency),
  MetricField::new(keys::TOTAL_VOLUME_USD, "Total Volume (USD)", FieldFormat::Currency),
  MetricField::new(keys::ALL_TIME_HIGH_USD, "All Time High (USD)", FieldFormat::Currency),
];

/// Token utility panel, in display order
pub const UTILITY_FIELDS: [MetricField; 5] = [
  MetricField::new(keys::TOKENS_LOCKED, "Tokens Locked", FieldFormat::Count),
  MetricField::new(keys::STAKING_RATIO, "Staking Ratio", FieldFormat::Ratio),
  MetricField::new(keys::TOKEN_NATURE, "Token Nature", FieldFormat::Text),
  MetricField::new(keys::AVG_TRADING_VOLUME_24H, "Average Trading Volume (24h)", FieldFormat::Currency),
  MetricField::new(keys::CATEGORY, "Category", FieldFormat::Text).with_placeholder(CATEGORY_NOT_FOUND),
];
