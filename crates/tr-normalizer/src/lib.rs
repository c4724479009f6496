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

//! # tr-normalizer
//!
//! Pure transforms from a raw [`TokenReport`] into the view-models the
//! dashboard draws: metric panels, the supply distribution pie and the
//! sentiment bar/pie pair.
//!
//! Nothing in this crate fails on malformed input. Missing or mistyped fields
//! resolve to placeholders (`"N/A"`, `"Category not found"`) or to `0` in
//! numeric series, and a chart without enough data to be meaningful comes back
//! as `None` rather than as an all-zero series.
//!
//! ## Usage
//!
//! ```ignore
//! use tr_models::TokenReport;
//! use tr_normalizer::normalize;
//!
//! let report = TokenReport::from_json_str(&body)?;
//! let view = normalize(&report);
//! match &view.supply_distribution {
//!     Some(pie) => draw_pie(pie),
//!     None => println!("Insufficient data to display supply distribution"),
//! }
//! ```

#![warn(clippy::all)]

pub mod charts;
pub mod fields;
pub mod format;
pub mod metrics;
pub mod view;

pub use charts::{derive_sentiment_series, derive_supply_distribution, SentimentCategory};
pub use fields::{FieldFormat, MetricField, BASIC_INFO_FIELDS, TOKENOMICS_FIELDS, UTILITY_FIELDS};
pub use metrics::{derive_metric_panel, format_overall_score};
pub use view::{derive_headline_list, normalize};

pub use tr_models::TokenReport;

/// Placeholder for any metric that is absent or unusable
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing `Category`
pub const CATEGORY_NOT_FOUND: &str = "Category not found";
