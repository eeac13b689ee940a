//! Conversions between OptionValue and serde_json values.

use crate::value::{OptionMap, OptionValue};

/// Convert a JSON document into an option value.
///
/// JSON has no raw code or labels, so strings always stay strings.
/// Object key order is kept.
pub fn json_to_value(json: serde_json::Value) -> OptionValue {
    match json {
        serde_json::Value::Null => OptionValue::Null,
        serde_json::Value::Bool(b) => OptionValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                OptionValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                OptionValue::Float(f)
            } else {
                OptionValue::String(n.to_string())
            }
        }
        serde_json::Value::String(s) => OptionValue::String(s),
        serde_json::Value::Array(arr) => {
            OptionValue::List(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => OptionValue::Map(
            map.into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect::<OptionMap>(),
        ),
    }
}

/// Convert an option value into JSON.
///
/// Raw code and labels become plain strings; non-finite floats become null.
pub fn value_to_json(value: &OptionValue) -> serde_json::Value {
    match value {
        OptionValue::Null => serde_json::Value::Null,
        OptionValue::Bool(b) => serde_json::Value::Bool(*b),
        OptionValue::Integer(i) => serde_json::Value::Number((*i).into()),
        OptionValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        OptionValue::String(s) => serde_json::Value::String(s.clone()),
        OptionValue::Raw(code) => serde_json::Value::String(code.as_str().to_string()),
        OptionValue::Label(label) => serde_json::Value::String(label.as_str().to_string()),
        OptionValue::List(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        OptionValue::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(json: serde_json::Value) -> Self {
        json_to_value(json)
    }
}
