use crate::domain::build_report;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use crate::upstream::{listing_items, ListingSource, SuburbQuery};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

pub fn handle<S: ListingSource>(req: Request, source: &S) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::info!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::dashboard_page()),
        ("GET", "/health") => json_response(
            200,
            &Health {
                status: "ok",
                message: "Suburb explorer is running",
            },
        ),
        ("GET", "/api/suburb/properties") => suburb_properties(&req, source),
        _ => Err(ServerError::NotFound),
    }
}

/// Fetch one suburb from upstream and answer with its summary and cards.
fn suburb_properties<S: ListingSource>(req: &Request, source: &S) -> ResultResp {
    let params = parse_query(req);

    let suburb = params
        .get("suburb")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("suburb is required".into()))?;
    let property_type = params
        .get("property_type")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    let query = SuburbQuery {
        suburb: suburb.to_string(),
        property_type: property_type.map(str::to_string),
    };

    let payload = source.suburb_properties(&query)?;
    let items = listing_items(payload);
    tracing::debug!(suburb, items = items.len(), "upstream batch received");

    let report = build_report(&items, suburb, property_type);
    json_response(200, &report)
}

// First occurrence of a repeated key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}
