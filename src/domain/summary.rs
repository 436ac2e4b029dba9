// src/domain/summary.rs

use crate::domain::format::serialize_whole;
use crate::domain::histogram::{build_histogram, PriceBin, DEFAULT_BIN_COUNT};
use crate::domain::listing::Listing;
use crate::domain::value::{is_truthy, nonzero_number, text};
use serde::Serialize;
use serde_json::Value;

/// Headline numbers for one suburb query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub suburb: String,
    pub property_type: Option<String>,
    pub count: usize,
    #[serde(serialize_with = "serialize_whole")]
    pub median_price: Option<f64>,
    #[serde(serialize_with = "serialize_whole")]
    pub median_bedrooms: Option<f64>,
    #[serde(serialize_with = "serialize_whole")]
    pub median_land_sqm: Option<f64>,
    #[serde(serialize_with = "serialize_whole")]
    pub median_garage_spaces: Option<f64>,
    pub price_bins: Vec<PriceBin>,
}

/// Aggregate a batch. Each median only sees the listings that actually
/// carry a usable value for it; `count` is the whole batch.
pub fn summarize(listings: &[Listing], suburb: &str, property_type: Option<&str>) -> Summary {
    let prices: Vec<f64> = listings
        .iter()
        .filter_map(|l| l.price)
        .filter(|p| *p != 0.0)
        .collect();
    let bedrooms: Vec<f64> = listings
        .iter()
        .filter_map(|l| nonzero_number(&l.bedrooms))
        .collect();
    let garage_spaces: Vec<f64> = listings
        .iter()
        .filter_map(|l| nonzero_number(&l.garage_spaces))
        .collect();
    let land_sizes: Vec<f64> = listings
        .iter()
        .filter_map(|l| land_size_sqm(&l.land_size))
        .collect();

    Summary {
        suburb: suburb.to_string(),
        property_type: property_type.map(str::to_string),
        count: listings.len(),
        median_price: median(&prices),
        median_bedrooms: median(&bedrooms),
        median_land_sqm: median(&land_sizes),
        median_garage_spaces: median(&garage_spaces),
        price_bins: build_histogram(&prices, DEFAULT_BIN_COUNT),
    }
}

/// Land size in square metres from `973`, `"973 m²"`, `"973m2"` and friends.
/// `"nan"` and anything unparseable is skipped.
pub fn land_size_sqm(value: &Value) -> Option<f64> {
    if !is_truthy(value) || value.as_str() == Some("nan") {
        return None;
    }

    let raw = text(Some(value));
    let stripped = raw.replace("m²", "").replace("m2", "");
    let stripped = stripped.trim();
    if stripped.is_empty() || stripped == "nan" {
        return None;
    }

    stripped.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Median of an unordered sample; `None` for an empty one.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
