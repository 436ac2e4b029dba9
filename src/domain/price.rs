// src/domain/price.rs

use crate::domain::value::field;
use serde_json::Value;

/// Numeric price fields, in the order they are trusted.
const NUMERIC_PRICE_FIELDS: [&str; 3] = ["price", "price_amount", "price_value"];

/// Text price fields, e.g. "$1,050,000" or "Offers over $900,000".
const TEXT_PRICE_FIELDS: [&str; 2] = ["price_text", "price_display"];

/// Pull a price out of a raw listing.
///
/// A numeric field only counts when it is strictly positive; zero and
/// negatives are upstream placeholders. Failing that, every digit in the
/// first non-empty text field is kept and read as a whole number, so
/// separators, currency symbols and any decimal fraction are dropped.
pub fn extract_price(item: &Value) -> Option<f64> {
    let numeric = NUMERIC_PRICE_FIELDS
        .iter()
        .filter_map(|key| field(item, key).and_then(Value::as_f64))
        .find(|price| *price > 0.0);

    if numeric.is_some() {
        return numeric;
    }

    let text = TEXT_PRICE_FIELDS
        .iter()
        .filter_map(|key| field(item, key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or("");

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    // A digit-only string always parses; f64 keeps very long runs from overflowing.
    digits.parse::<f64>().ok()
}
