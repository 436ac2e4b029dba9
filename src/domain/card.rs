// src/domain/card.rs

use crate::domain::format::{format_currency, serialize_whole};
use crate::domain::listing::Listing;
use serde::Serialize;
use serde_json::Value;

pub const DESCRIPTION_LIMIT: usize = 200;
pub const PRICE_ON_REQUEST: &str = "Price on request";

/// What the dashboard renders for one listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    pub address: String,
    #[serde(serialize_with = "serialize_whole")]
    pub price: Option<f64>,
    pub price_text: String,
    pub bedrooms: Value,
    pub bathrooms: Value,
    pub car_spaces: Value,
    pub land_size: Value,
    pub property_type: Value,
    pub listing_date: Value,
    pub description: String,
    pub coordinates: Value,
}

impl From<&Listing> for PropertyCard {
    fn from(listing: &Listing) -> Self {
        let price_text = match listing.price {
            Some(price) if price != 0.0 => format_currency(price),
            _ => PRICE_ON_REQUEST.to_string(),
        };

        PropertyCard {
            address: listing.address.clone(),
            price: listing.price,
            price_text,
            bedrooms: listing.bedrooms.clone(),
            bathrooms: listing.bathrooms.clone(),
            car_spaces: listing.garage_spaces.clone(),
            land_size: listing.land_size.clone(),
            property_type: listing.property_type.clone(),
            listing_date: listing.listing_date.clone(),
            description: truncate_description(&listing.description),
            coordinates: listing.coordinates.clone(),
        }
    }
}

/// Cut at `DESCRIPTION_LIMIT` characters (not bytes) and mark the cut with "...".
fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}
