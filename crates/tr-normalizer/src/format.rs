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

// Display formatting for report numbers

/// Insert `,` between every group of three digits, counting from the right
///
/// # Arguments
/// * `digits` - ASCII digits only, no sign or decimal point
pub fn group_thousands(digits: &str) -> String {
  let len = digits.len();
  let mut out = String::with_capacity(len + len / 3);

  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (len - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }

  out
}

/// Round to a whole number and group thousands: `19700000.4` -> `19,700,000`
pub fn format_count(value: f64) -> String {
  let rounded = value.round();
  let digits = group_thousands(&format!("{:.0}", rounded.abs()));

  if rounded < 0.0 { format!("-{}", digits) } else { digits }
}

/// Dollar amount with grouped thousands and two decimals: `67012.5` -> `$67,012.50`
///
/// Negative amounts keep the sign after the dollar sign (`$-5.00`).
pub fn format_currency(value: f64) -> String {
  let fixed = format!("{:.2}", value.abs());
  let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
  let negative = value < 0.0 && fixed != "0.00";

  format!("${}{}.{}", if negative { "-" } else { "" }, group_thousands(whole), cents)
}

/// Fraction as a percentage with two decimals: `0.1534` -> `15.34%`
pub fn format_ratio(value: f64) -> String {
  format!("{:.2}%", value * 100.0)
}

/// Plain two-decimal number: `7.4567` -> `7.46`
pub fn format_score(value: f64) -> String {
  format!("{:.2}", value)
}
