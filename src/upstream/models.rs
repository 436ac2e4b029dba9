use serde::Serialize;
use serde_json::Value;

/// Query parameters forwarded to `/suburb/properties`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuburbQuery {
    pub suburb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

// Response shapes seen from the listings API:
//
//  { "results": [ item, item, ... ] }
//  [ item, item, ... ]
//
// Anything else is treated as an empty batch.

/// Pull the listing items out of an upstream payload.
pub fn listing_items(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut obj) => match obj.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
