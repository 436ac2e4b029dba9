// src/domain/report.rs

use crate::domain::card::PropertyCard;
use crate::domain::listing::normalize_all;
use crate::domain::summary::{summarize, Summary};
use serde::Serialize;
use serde_json::Value;

/// Response body of `/api/suburb/properties`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuburbReport {
    pub summary: Summary,
    pub listings: Vec<PropertyCard>,
}

/// Normalize raw upstream items, then summarize and card them.
pub fn build_report(items: &[Value], suburb: &str, property_type: Option<&str>) -> SuburbReport {
    let listings = normalize_all(items);

    SuburbReport {
        summary: summarize(&listings, suburb, property_type),
        listings: listings.iter().map(PropertyCard::from).collect(),
    }
}
