//! Property-based tests for the normalizer
//!
//! Reports are generated with every field independently present, absent, null
//! or of the wrong JSON type.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tr_normalizer::{
  derive_metric_panel, derive_sentiment_series, derive_supply_distribution, normalize, TokenReport,
  TOKENOMICS_FIELDS, UTILITY_FIELDS,
};

/// A JSON value for a numeric field: usually a number, sometimes junk
fn numeric_field_strategy() -> impl Strategy<Value = Option<Value>> {
  prop_oneof![
    4 => (-1.0e12f64..1.0e15).prop_map(|n| Some(json!(n))),
    2 => (0u64..10_000_000).prop_map(|n| Some(json!(n))),
    1 => Just(None),
    1 => Just(Some(Value::Null)),
    1 => "[a-z0-9,]{0,8}".prop_map(|s| Some(Value::String(s))),
    1 => any::<bool>().prop_map(|b| Some(Value::Bool(b))),
  ]
}

fn group_strategy(keys: &'static [&'static str]) -> impl Strategy<Value = Option<Value>> {
  let fields = prop::collection::vec(numeric_field_strategy(), keys.len());
  prop_oneof![
    6 => fields.prop_map(move |values| {
      let mut map = Map::new();
      for (key, value) in keys.iter().zip(values) {
        if let Some(v) = value {
          map.insert(key.to_string(), v);
        }
      }
      Some(Value::Object(map))
    }),
    1 => Just(None),
    1 => Just(Some(json!("unavailable"))),
  ]
}

const TOKENOMICS_KEYS: &[&str] = &[
  "Total Supply",
  "Circulating Supply",
  "Token Price (USD)",
  "Market Cap (USD)",
  "Total Volume (USD)",
  "All Time High (USD)",
];
const UTILITY_KEYS: &[&str] = &["Tokens Locked", "Staking Ratio", "Average Trading Volume 24 hrs"];
const SENTIMENT_KEYS: &[&str] =
  &["news_score", "insta_score", "twitter_profile_score", "twitter_hashtag_score"];

fn report_strategy() -> impl Strategy<Value = Value> {
  (
    group_strategy(TOKENOMICS_KEYS),
    group_strategy(UTILITY_KEYS),
    group_strategy(SENTIMENT_KEYS),
    numeric_field_strategy(),
  )
    .prop_map(|(tokenomics, utility, sentiment, score)| {
      let mut doc = Map::new();
      for (key, group) in
        [("tokenomics_info", tokenomics), ("utility_info", utility), ("sentiment_data", sentiment)]
      {
        if let Some(g) = group {
          doc.insert(key.to_string(), g);
        }
      }
      if let Some(s) = score {
        doc.insert("overall_score".to_string(), s);
      }
      Value::Object(doc)
    })
}

fn number_at(doc: &Value, group: &str, key: &str) -> Option<f64> {
  doc.get(group)?.get(key)?.as_f64()
}

mod proptest_tests {
  use super::*;

  proptest! {
    #[test]
    fn test_sentiment_always_four_in_order(doc in report_strategy()) {
      let report = TokenReport::from_value(doc.clone());
      let series = derive_sentiment_series(&report);

      let categories: Vec<_> = series.bars.iter().map(|b| b.category).collect();
      prop_assert_eq!(categories, vec!["News", "Instagram", "Twitter Profile", "Twitter Hashtag"]);

      for (bar, key) in series.bars.iter().zip(SENTIMENT_KEYS) {
        let expected = number_at(&doc, "sentiment_data", key).unwrap_or(0.0);
        prop_assert_eq!(bar.value, expected);
      }
    }

    #[test]
    fn test_supply_renderable_iff_circulating_positive(doc in report_strategy()) {
      let circulating = number_at(&doc, "tokenomics_info", "Circulating Supply");
      let report = TokenReport::from_value(doc);
      let series = derive_supply_distribution(&report);

      match circulating {
        Some(c) if c > 0.0 => {
          let series = series.expect("positive circulating supply must render");
          prop_assert!(!series.slices.is_empty());
          prop_assert!(series.slices.iter().all(|s| s.value > 0.0));
          prop_assert_eq!(series.slices[0].label, "Circulating Supply");
        }
        _ => prop_assert!(series.is_none()),
      }
    }

    #[test]
    fn test_supply_total_bounded_by_consistent_total(doc in report_strategy()) {
      let total = number_at(&doc, "tokenomics_info", "Total Supply").unwrap_or(0.0).max(0.0);
      let locked = number_at(&doc, "utility_info", "Tokens Locked").unwrap_or(0.0).max(0.0);
      let report = TokenReport::from_value(doc);

      if let Some(series) = derive_supply_distribution(&report) {
        let circulating = series.slices[0].value;
        if total >= circulating + locked {
          prop_assert!(series.total() <= total * (1.0 + 1e-9));
        } else {
          prop_assert!(!series.labels().contains(&"Other"));
        }
      }
    }

    #[test]
    fn test_placeholder_law_for_numeric_fields(doc in report_strategy()) {
      let report = TokenReport::from_value(doc.clone());
      let tokenomics = derive_metric_panel(&report.tokenomics_info, &TOKENOMICS_FIELDS);

      for field in TOKENOMICS_FIELDS.iter() {
        let value = tokenomics.get(field.label).unwrap();
        match number_at(&doc, "tokenomics_info", field.key) {
          Some(_) => prop_assert_ne!(value, "N/A"),
          None => prop_assert_eq!(value, "N/A"),
        }
      }

      let utility = derive_metric_panel(&report.utility_info, &UTILITY_FIELDS);
      prop_assert_eq!(utility.len(), UTILITY_FIELDS.len());

      for field in UTILITY_FIELDS.iter().filter(|f| f.format.is_numeric()) {
        let value = utility.get(field.label).unwrap();
        match number_at(&doc, "utility_info", field.key) {
          Some(_) => prop_assert_ne!(value, "N/A"),
          None => prop_assert_eq!(value, "N/A"),
        }
      }
    }

    #[test]
    fn test_normalize_is_idempotent(doc in report_strategy()) {
      let report = TokenReport::from_value(doc);
      prop_assert_eq!(normalize(&report), normalize(&report));
    }
  }
}
