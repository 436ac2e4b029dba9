mod client;
mod models;
mod upstream_error;

pub use client::ListingsClient;
pub use models::{listing_items, SuburbQuery};
pub use upstream_error::UpstreamError;

use serde_json::Value;

/// Anything that can answer a suburb listings query with the raw upstream payload.
pub trait ListingSource {
    fn suburb_properties(&self, query: &SuburbQuery) -> Result<Value, UpstreamError>;
}
