// src/domain/listing.rs

use crate::domain::price::extract_price;
use crate::domain::value::{object_or_empty, passthrough, text};
use serde_json::{Map, Value};

/// One listing flattened out of the nested upstream payload.
///
/// Count-like attributes stay as raw JSON because upstream mixes numbers,
/// numeric strings and "973 m²"-style text; the summary decides what it can
/// read from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub price: Option<f64>,
    pub bedrooms: Value,
    pub bathrooms: Value,
    pub land_size: Value,
    pub garage_spaces: Value,
    pub property_type: Value,
    pub listing_date: Value,
    pub address: String,
    pub description: String,
    pub coordinates: Value,
}

impl Listing {
    /// Never fails: whatever is missing or mistyped comes back as null or empty.
    pub fn from_raw(item: &Value) -> Self {
        let attributes = object_or_empty(item, "attributes");
        let address = object_or_empty(item, "address");
        let top = item.as_object();

        let top_level = |key: &str| top.map_or(Value::Null, |obj| passthrough(obj, key));

        Listing {
            price: extract_price(item),
            bedrooms: passthrough(attributes, "bedrooms"),
            bathrooms: passthrough(attributes, "bathrooms"),
            land_size: passthrough(attributes, "land_size"),
            garage_spaces: passthrough(attributes, "garage_spaces"),
            property_type: top_level("property_type"),
            listing_date: top_level("listing_date"),
            address: format_address(address),
            description: attributes
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            coordinates: top
                .and_then(|obj| obj.get("coordinates"))
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

/// "street, sal, state" with the separators left by missing parts trimmed off.
fn format_address(address: &Map<String, Value>) -> String {
    let joined = format!(
        "{}, {}, {}",
        text(address.get("street")),
        text(address.get("sal")),
        text(address.get("state")),
    );

    joined.trim_matches(|c: char| c == ',' || c == ' ').to_string()
}

/// Normalize a whole upstream batch, keeping order.
pub fn normalize_all(items: &[Value]) -> Vec<Listing> {
    items.iter().map(Listing::from_raw).collect()
}
