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

use crate::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Source keys, exactly as the report service spells them
pub mod keys {
  pub const TOKEN_NAME: &str = "Token Name";
  pub const TOKEN_SYMBOL: &str = "Token Symbol";
  pub const WEBSITE_LINK: &str = "Website Link";
  pub const EXPLORER: &str = "Explorer";

  pub const TOTAL_SUPPLY: &str = "Total Supply";
  pub const CIRCULATING_SUPPLY: &str = "Circulating Supply";
  pub const TOKEN_PRICE_USD: &str = "Token Price (USD)";
  pub const MARKET_CAP_USD: &str = "Market Cap (USD)";
  pub const TOTAL_VOLUME_USD: &str = "Total Volume (USD)";
  pub const ALL_TIME_HIGH_USD: &str = "All Time High (USD)";

  pub const TOKENS_LOCKED: &str = "Tokens Locked";
  pub const STAKING_RATIO: &str = "Staking Ratio";
  pub const TOKEN_NATURE: &str = "Token Nature";
  pub const AVG_TRADING_VOLUME_24H: &str = "Average Trading Volume 24 hrs";
  pub const CATEGORY: &str = "Category";

  pub const NEWS_SCORE: &str = "news_score";
  pub const INSTA_SCORE: &str = "insta_score";
  pub const TWITTER_PROFILE_SCORE: &str = "twitter_profile_score";
  pub const TWITTER_HASHTAG_SCORE: &str = "twitter_hashtag_score";
}

/// A single field read out of a data group, with its JSON type already checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
  /// Absent, `null`, or of a type the field cannot hold
  Missing,
  Number(f64),
  Text(&'a str),
}

impl<'a> FieldValue<'a> {
  fn from_number(value: Option<f64>) -> Self {
    value.map_or(FieldValue::Missing, FieldValue::Number)
  }

  fn from_text(value: &'a Option<String>) -> Self {
    value.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
  }

  /// The numeric value, if the field holds one
  pub fn as_number(&self) -> Option<f64> {
    match self {
      FieldValue::Number(n) => Some(*n),
      _ => None,
    }
  }
}

/// A named data group of the report whose fields can be looked up by source key
pub trait ReportGroup {
  /// Key of the group in the report document
  const NAME: &'static str;

  /// Look up a field by its source key; unknown keys are `Missing`
  fn field(&self, key: &str) -> FieldValue<'_>;
}

/// The raw document returned by the report service for one token
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenReport {
  #[serde(default, deserialize_with = "lenient::group")]
  pub basic_info: BasicInfo,

  #[serde(default, deserialize_with = "lenient::group")]
  pub tokenomics_info: TokenomicsInfo,

  #[serde(default, deserialize_with = "lenient::group")]
  pub utility_info: UtilityInfo,

  #[serde(default, deserialize_with = "lenient::group")]
  pub sentiment_data: SentimentData,

  /// `None` when absent or not a list of `[headline, url]` pairs
  #[serde(default, deserialize_with = "lenient::headlines")]
  pub headlines: Option<Vec<Headline>>,

  #[serde(default, deserialize_with = "lenient::number")]
  pub overall_score: Option<f64>,
}

impl TokenReport {
  /// Build a report from an already-parsed JSON value.
  ///
  /// Never fails: a document that is not an object yields an empty report.
  pub fn from_value(value: Value) -> Self {
    if !value.is_object() {
      warn!("report document is not a JSON object; treating every field as missing");
      return TokenReport::default();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
      warn!("unreadable report document ({}); treating every field as missing", e);
      TokenReport::default()
    })
  }

  /// Parse a report from response text; fails only when the text is not JSON at all
  pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    Ok(Self::from_value(value))
  }
}

/// One news headline with its link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
  pub title: String,
  pub url: String,
}

/// `basic_info` group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BasicInfo {
  #[serde(rename = "Token Name", default, deserialize_with = "lenient::text")]
  pub token_name: Option<String>,

  #[serde(rename = "Token Symbol", default, deserialize_with = "lenient::text")]
  pub token_symbol: Option<String>,

  #[serde(rename = "Website Link", default, deserialize_with = "lenient::text")]
  pub website_link: Option<String>,

  #[serde(rename = "Explorer", default, deserialize_with = "lenient::text")]
  pub explorer: Option<String>,
}

impl ReportGroup for BasicInfo {
  const NAME: &'static str = "basic_info";

  fn field(&self, key: &str) -> FieldValue<'_> {
    match key {
      keys::TOKEN_NAME => FieldValue::from_text(&self.token_name),
      keys::TOKEN_SYMBOL => FieldValue::from_text(&self.token_symbol),
      keys::WEBSITE_LINK => FieldValue::from_text(&self.website_link),
      keys::EXPLORER => FieldValue::from_text(&self.explorer),
      _ => FieldValue::Missing,
    }
  }
}

/// `tokenomics_info` group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenomicsInfo {
  #[serde(rename = "Total Supply", default, deserialize_with = "lenient::number")]
  pub total_supply: Option<f64>,

  #[serde(rename = "Circulating Supply", default, deserialize_with = "lenient::number")]
  pub circulating_supply: Option<f64>,

  #[serde(rename = "Token Price (USD)", default, deserialize_with = "lenient::number")]
  pub token_price_usd: Option<f64>,

  #[serde(rename = "Market Cap (USD)", default, deserialize_with = "lenient::number")]
  pub market_cap_usd: Option<f64>,

  #[serde(rename = "Total Volume (USD)", default, deserialize_with = "lenient::number")]
  pub total_volume_usd: Option<f64>,

  #[serde(rename = "All Time High (USD)", default, deserialize_with = "lenient::number")]
  pub all_time_high_usd: Option<f64>,
}

impl ReportGroup for TokenomicsInfo {
  const NAME: &'static str = "tokenomics_info";

  fn field(&self, key: &str) -> FieldValue<'_> {
    match key {
      keys::TOTAL_SUPPLY => FieldValue::from_number(self.total_supply),
      keys::CIRCULATING_SUPPLY => FieldValue::from_number(self.circulating_supply),
      keys::TOKEN_PRICE_USD => FieldValue::from_number(self.token_price_usd),
      keys::MARKET_CAP_USD => FieldValue::from_number(self.market_cap_usd),
      keys::TOTAL_VOLUME_USD => FieldValue::from_number(self.total_volume_usd),
      keys::ALL_TIME_HIGH_USD => FieldValue::from_number(self.all_time_high_usd),
      _ => FieldValue::Missing,
    }
  }
}

/// `utility_info` group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UtilityInfo {
  #[serde(rename = "Tokens Locked", default, deserialize_with = "lenient::number")]
  pub tokens_locked: Option<f64>,

  /// Fraction between 0 and 1
  #[serde(rename = "Staking Ratio", default, deserialize_with = "lenient::number")]
  pub staking_ratio: Option<f64>,

  #[serde(rename = "Token Nature", default, deserialize_with = "lenient::text")]
  pub token_nature: Option<String>,

  #[serde(
    rename = "Average Trading Volume 24 hrs",
    default,
    deserialize_with = "lenient::number"
  )]
  pub avg_trading_volume_24h: Option<f64>,

  #[serde(rename = "Category", default, deserialize_with = "lenient::text")]
  pub category: Option<String>,
}

impl ReportGroup for UtilityInfo {
  const NAME: &'static str = "utility_info";

  fn field(&self, key: &str) -> FieldValue<'_> {
    match key {
      keys::TOKENS_LOCKED => FieldValue::from_number(self.tokens_locked),
      keys::STAKING_RATIO => FieldValue::from_number(self.staking_ratio),
      keys::TOKEN_NATURE => FieldValue::from_text(&self.token_nature),
      keys::AVG_TRADING_VOLUME_24H => FieldValue::from_number(self.avg_trading_volume_24h),
      keys::CATEGORY => FieldValue::from_text(&self.category),
      _ => FieldValue::Missing,
    }
  }
}

/// `sentiment_data` group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentimentData {
  #[serde(default, deserialize_with = "lenient::number")]
  pub news_score: Option<f64>,

  #[serde(default, deserialize_with = "lenient::number")]
  pub insta_score: Option<f64>,

  #[serde(default, deserialize_with = "lenient::number")]
  pub twitter_profile_score: Option<f64>,

  #[serde(default, deserialize_with = "lenient::number")]
  pub twitter_hashtag_score: Option<f64>,
}

impl ReportGroup for SentimentData {
  const NAME: &'static str = "sentiment_data";

  fn field(&self, key: &str) -> FieldValue<'_> {
    match key {
      keys::NEWS_SCORE => FieldValue::from_number(self.news_score),
      keys::INSTA_SCORE => FieldValue::from_number(self.insta_score),
      keys::TWITTER_PROFILE_SCORE => FieldValue::from_number(self.twitter_profile_score),
      keys::TWITTER_HASHTAG_SCORE => FieldValue::from_number(self.twitter_hashtag_score),
      _ => FieldValue::Missing,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  fn sample_report_json() -> &'static str {
    r#"{
      "basic_info": {
        "Token Name": "Bitcoin",
        "Token Symbol": "BTC",
        "Website Link": "https://bitcoin.org",
        "Explorer": "https://blockchair.com/bitcoin"
      },
      "tokenomics_info": {
        "Total Supply": 21000000,
        "Circulating Supply": 19700000.0,
        "Token Price (USD)": 67012.5,
        "Market Cap (USD)": 1320146250000.0,
        "Total Volume (USD)": 28500000000,
        "All Time High (USD)": 73738
      },
      "utility_info": {
        "Tokens Locked": 0,
        "Staking Ratio": null,
        "Token Nature": "Store of value",
        "Average Trading Volume 24 hrs": 31000000000.0,
        "Category": "Layer 1"
      },
      "sentiment_data": {
        "news_score": 0.62,
        "insta_score": 0.4,
        "twitter_profile_score": 0.71,
        "twitter_hashtag_score": 0.55
      },
      "headlines": [["Bitcoin tops 67k", "https://news.example/btc"]],
      "overall_score": 7.456
    }"#
  }

  #[test]
  fn test_token_report_deserialize() {
    let report = TokenReport::from_json_str(sample_report_json()).unwrap();

    assert_eq!(report.basic_info.token_name.as_deref(), Some("Bitcoin"));
    assert_eq!(report.basic_info.token_symbol.as_deref(), Some("BTC"));
    assert_eq!(report.tokenomics_info.total_supply, Some(21_000_000.0));
    assert_eq!(report.tokenomics_info.circulating_supply, Some(19_700_000.0));
    assert_eq!(report.utility_info.tokens_locked, Some(0.0));
    assert_eq!(report.utility_info.staking_ratio, None);
    assert_eq!(report.utility_info.category.as_deref(), Some("Layer 1"));
    assert_eq!(report.sentiment_data.twitter_profile_score, Some(0.71));
    assert_eq!(report.headlines.as_ref().map(Vec::len), Some(1));
    assert_eq!(report.overall_score, Some(7.456));
  }

  #[test]
  fn test_missing_groups_default_to_empty() {
    let report = TokenReport::from_value(json!({"basic_info": {"Token Name": "Dogecoin"}}));

    assert_eq!(report.basic_info.token_name.as_deref(), Some("Dogecoin"));
    assert_eq!(report.tokenomics_info, TokenomicsInfo::default());
    assert_eq!(report.utility_info, UtilityInfo::default());
    assert_eq!(report.sentiment_data, SentimentData::default());
    assert_eq!(report.headlines, None);
    assert_eq!(report.overall_score, None);
  }

  #[test]
  fn test_group_of_wrong_type_is_empty() {
    let report = TokenReport::from_value(json!({
      "utility_info": "unavailable",
      "tokenomics_info": [1, 2, 3],
      "sentiment_data": null
    }));

    assert_eq!(report.utility_info, UtilityInfo::default());
    assert_eq!(report.tokenomics_info, TokenomicsInfo::default());
    assert_eq!(report.sentiment_data, SentimentData::default());
  }

  #[test]
  fn test_type_mismatch_is_missing() {
    let report = TokenReport::from_value(json!({
      "tokenomics_info": {"Total Supply": "21,000,000", "Circulating Supply": 100},
      "overall_score": "high"
    }));

    assert_eq!(report.tokenomics_info.total_supply, None);
    assert_eq!(report.tokenomics_info.circulating_supply, Some(100.0));
    assert_eq!(report.overall_score, None);
  }

  #[test]
  fn test_non_object_document_is_empty() {
    assert_eq!(TokenReport::from_value(json!([1, 2])), TokenReport::default());
    assert_eq!(TokenReport::from_value(json!("error")), TokenReport::default());
    assert_eq!(TokenReport::from_json_str("null").unwrap(), TokenReport::default());
  }

  #[test]
  fn test_invalid_json_text_is_an_error() {
    assert!(TokenReport::from_json_str("<html>502 Bad Gateway</html>").is_err());
  }

  #[test]
  fn test_field_lookup_matches_serde_keys() {
    let report = TokenReport::from_json_str(sample_report_json()).unwrap();

    assert_eq!(report.basic_info.field(keys::EXPLORER), FieldValue::Text("https://blockchair.com/bitcoin"));
    assert_eq!(report.tokenomics_info.field(keys::ALL_TIME_HIGH_USD), FieldValue::Number(73738.0));
    assert_eq!(report.tokenomics_info.field(keys::TOKEN_PRICE_USD).as_number(), Some(67012.5));
    assert_eq!(report.utility_info.field(keys::AVG_TRADING_VOLUME_24H), FieldValue::Number(31_000_000_000.0));
    assert_eq!(report.utility_info.field(keys::STAKING_RATIO), FieldValue::Missing);
    assert_eq!(report.sentiment_data.field(keys::INSTA_SCORE), FieldValue::Number(0.4));
    assert_eq!(report.basic_info.field("Unknown Key"), FieldValue::Missing);
  }

  #[test]
  fn test_group_names() {
    assert_eq!(BasicInfo::NAME, "basic_info");
    assert_eq!(TokenomicsInfo::NAME, "tokenomics_info");
    assert_eq!(UtilityInfo::NAME, "utility_info");
    assert_eq!(SentimentData::NAME, "sentiment_data");
  }
}
