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

use crate::fields::{FieldFormat, MetricField};
use tr_models::{FieldValue, MetricPanel, MetricRow, ReportGroup, TokenReport};
use tracing::debug;

/// Build a metric panel for one data group.
///
/// Rows follow the order of `fields`. A value that is absent, or that is not a
/// number where a numeric format is requested, renders as the field's
/// placeholder; the panel itself is always complete.
pub fn derive_metric_panel<G: ReportGroup>(group: &G, fields: &[MetricField]) -> MetricPanel {
  let rows = fields
    .iter()
    .map(|field| {
      let value = group.field(field.key);
      if value == FieldValue::Missing {
        debug!("{}.{} unavailable, showing '{}'", G::NAME, field.key, field.placeholder);
      }
      MetricRow { label: field.label, value: field.render(value) }
    })
    .collect();

  MetricPanel { rows }
}

const OVERALL_SCORE: MetricField = MetricField::new("overall_score", "Score", FieldFormat::Score);

/// Overall score with two decimals, or `"N/A"`
pub fn format_overall_score(report: &TokenReport) -> String {
  OVERALL_SCORE.render(report.overall_score.map_or(FieldValue::Missing, FieldValue::Number))
}
