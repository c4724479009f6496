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

use crate::charts::{derive_sentiment_series, derive_supply_distribution};
use crate::fields::{BASIC_INFO_FIELDS, TOKENOMICS_FIELDS, UTILITY_FIELDS};
use crate::metrics::{derive_metric_panel, format_overall_score};
use crate::NOT_AVAILABLE;
use tr_models::{Headline, TokenReport, TokenView};

/// News headlines in source order; empty when absent or malformed
pub fn derive_headline_list(report: &TokenReport) -> Vec<Headline> {
  report.headlines.clone().unwrap_or_default()
}

/// Run every derivation over one report.
///
/// Each report is normalized on its own; comparing two tokens means calling
/// this twice.
pub fn normalize(report: &TokenReport) -> TokenView {
  TokenView {
    display_name: report.basic_info.token_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    basic_info: derive_metric_panel(&report.basic_info, &BASIC_INFO_FIELDS),
    tokenomics: derive_metric_panel(&report.tokenomics_info, &TOKENOMICS_FIELDS),
    utility: derive_metric_panel(&report.utility_info, &UTILITY_FIELDS),
    supply_distribution: derive_supply_distribution(report),
    sentiment: derive_sentiment_series(report),
    headlines: derive_headline_list(report),
    overall_score: format_overall_score(report),
  }
}
