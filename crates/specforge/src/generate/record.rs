//! Generated record representation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One generated record: an ordered name→value mapping. Field order follows
/// the schema's document order, which is why this is an IndexMap.
pub type Record = IndexMap<String, SampleValue>;

/// A JSON-like generated value.
///
/// Serialized untagged, so records render as plain JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<SampleValue>),
    Object(Record),
}

impl SampleValue {
    /// The contained string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SampleValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The contained elements, if this is an array value.
    pub fn as_array(&self) -> Option<&[SampleValue]> {
        match self {
            SampleValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The contained mapping, if this is an object value.
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            SampleValue::Object(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_json() {
        let mut record = Record::new();
        record.insert("id".to_string(), SampleValue::from("sample_id"));
        record.insert("count".to_string(), SampleValue::Integer(7));
        record.insert(
            "tags".to_string(),
            SampleValue::Array(vec![SampleValue::from("a"), SampleValue::from("b")]),
        );

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"sample_id","count":7,"tags":["a","b"]}"#);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut record = Record::new();
        for name in ["z", "a", "m"] {
            record.insert(name.to_string(), SampleValue::Integer(0));
        }
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
