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

use thiserror::Error;

/// The main error type for tr-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success status returned by the report service
  #[error("{0}")]
  Status(u16),

  /// Caller supplied something unusable, e.g. an empty token name
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

impl Error {
  /// Whether a retry could plausibly succeed
  pub fn is_transient(&self) -> bool {
    match self {
      Error::Http(_) => true,
      Error::Status(code) => *code >= 500,
      _ => false,
    }
  }
}

/// Result type alias for tr-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_display_is_bare_code() {
    assert_eq!(Error::Status(404).to_string(), "404");
  }

  #[test]
  fn test_transient_classification() {
    assert!(Error::Http("connection reset".to_string()).is_transient());
    assert!(Error::Status(503).is_transient());
    assert!(!Error::Status(404).is_transient());
    assert!(!Error::InvalidInput("empty".to_string()).is_transient());
  }
}
