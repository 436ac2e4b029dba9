// src/domain/value.rs
//
// Total coercions over schema-free JSON. None of these fail; anything that
// cannot be read as the requested shape comes back as `None`.

use serde_json::{Map, Value};

/// Look up `key` on `value` if it is an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|obj| obj.get(key))
}

/// The object at `key`, or an empty map when missing or not an object.
pub fn object_or_empty<'a>(value: &'a Value, key: &str) -> &'a Map<String, Value> {
    static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();
    field(value, key)
        .and_then(Value::as_object)
        .unwrap_or_else(|| EMPTY.get_or_init(Map::new))
}

/// Clone of the value at `key`, `null` when absent.
pub fn passthrough(map: &Map<String, Value>, key: &str) -> Value {
    map.get(key).cloned().unwrap_or(Value::Null)
}

/// Render a scalar as text. Strings as-is, numbers in their JSON form,
/// everything else (null, bools, containers) as empty.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Read a JSON number or a numeric string as `f64`. NaN is treated as absent.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// A count-like value worth including in statistics: numeric and non-zero.
pub fn nonzero_number(value: &Value) -> Option<f64> {
    number(value).filter(|n| *n != 0.0)
}

/// Truthiness the upstream data relies on: null, false, 0, "" and empty
/// containers are all "not provided".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
