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

//! Lenient `deserialize_with` helpers.
//!
//! The report service enforces no schema, so each helper accepts any JSON value
//! and narrows it to the expected type, mapping everything else to `None` (or
//! the type's default). None of them ever returns an error for well-formed JSON.

use crate::report::Headline;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Keep JSON numbers only
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.and_then(|v| match v {
    Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
    Value::Null => None,
    other => {
      debug!("discarding non-numeric value {}", other);
      None
    }
  }))
}

/// Keep strings; scalar numbers and booleans are kept as their JSON text
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.and_then(|v| match v {
    Value::String(s) => Some(s),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Null => None,
    other => {
      debug!("discarding non-scalar value {}", other);
      None
    }
  }))
}

/// Deserialize a data group, falling back to an empty group when the value is
/// absent, `null` or not an object
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  let value = Value::deserialize(deserializer)?;
  match value {
    Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_else(|e| {
      debug!("discarding malformed group: {}", e);
      T::default()
    })),
    Value::Null => Ok(T::default()),
    other => {
      debug!("expected an object for data group, got {}", other);
      Ok(T::default())
    }
  }
}

/// Keep the headline list only when every entry is a `[headline, url]` pair of strings
pub fn headlines<'de, D>(deserializer: D) -> Result<Option<Vec<Headline>>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.and_then(|v| {
    let parsed = parse_headlines(&v);
    if parsed.is_none() {
      debug!("discarding malformed headline list");
    }
    parsed
  }))
}

fn parse_headlines(value: &Value) -> Option<Vec<Headline>> {
  value
    .as_array()?
    .iter()
    .map(|item| match item.as_array()?.as_slice() {
      [Value::String(title), Value::String(url)] => {
        Some(Headline { title: title.clone(), url: url.clone() })
      }
      _ => None,
    })
    .collect()
}
