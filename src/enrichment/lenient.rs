//! Tolerant field deserialization for loosely-structured API payloads.
//!
//! Catalog records are partially populated and occasionally carry a field of
//! the wrong JSON type. A field tagged with
//! `#[serde(default, deserialize_with = "lenient::or_default")]` falls back to
//! its `Default` instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize `T`, or `T::default()` if the value has the wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "or_default")]
        name: Option<String>,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_wrong_types_become_defaults() {
        let sample: Sample = serde_json::from_str(r#"{"name": 42, "tags": "oops"}"#).unwrap();
        assert!(sample.name.is_none());
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_well_formed_values_pass_through() {
        let sample: Sample = serde_json::from_str(r#"{"name": "x", "tags": ["a"]}"#).unwrap();
        assert_eq!(sample.name.as_deref(), Some("x"));
        assert_eq!(sample.tags, vec!["a"]);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let sample: Sample = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(sample.name.is_none());
        assert!(sample.tags.is_empty());
    }
}
