// src/tests/router_tests/properties_tests.rs
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, get, FakeSource};
use serde_json::json;

/// Run the request through the router the way the server loop does.
fn respond(uri: &str, source: &FakeSource) -> astra::Response {
    match handle(get(uri), source) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

#[test]
fn richmond_end_to_end() {
    let source = FakeSource::returning(json!({
        "results": [
            {"price_amount": 800000, "attributes": {"bedrooms": 3}},
            {"price_text": "$1,200,000", "attributes": {"bedrooms": 4}}
        ]
    }));

    let mut resp = respond("/api/suburb/properties?suburb=Richmond", &source);

    assert_eq!(resp.status(), 200);
    let body = body_json(&mut resp);
    let summary = &body["summary"];
    assert_eq!(summary["suburb"], json!("Richmond"));
    assert_eq!(summary["property_type"], json!(null));
    assert_eq!(summary["count"], json!(2));
    assert_eq!(summary["median_price"].as_f64(), Some(1000000.0));
    assert_eq!(summary["median_bedrooms"].as_f64(), Some(3.5));

    let bins = summary["price_bins"].as_array().unwrap();
    assert_eq!(bins.len(), 8);
    assert_eq!(bins[0]["count"], json!(1));
    assert_eq!(bins[7]["count"], json!(1));
    assert_eq!(bins[0]["label"], json!("$800,000–$850,000"));
    assert_eq!(bins[7]["label"], json!("$1,150,000–$1,200,000"));
    let total: u64 = bins.iter().filter_map(|b| b["count"].as_u64()).sum();
    assert_eq!(total, 2);

    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[1]["price_text"], json!("$1,200,000"));
}

#[test]
fn missing_suburb_is_rejected_before_fetching() {
    let source = FakeSource::returning(json!([]));

    for uri in [
        "/api/suburb/properties",
        "/api/suburb/properties?property_type=house",
        "/api/suburb/properties?suburb=&property_type=unit",
        "/api/suburb/properties?suburb=%20%20",
    ] {
        let mut resp = respond(uri, &source);
        assert_eq!(resp.status(), 400, "{uri}");
        assert_eq!(body_json(&mut resp), json!({"error": "suburb is required"}));
    }

    assert!(source.seen.borrow().is_empty());
}

#[test]
fn missing_suburb_maps_to_bad_request() {
    let source = FakeSource::returning(json!([]));
    let result = handle(get("/api/suburb/properties"), &source);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn query_is_decoded_trimmed_and_forwarded() {
    let source = FakeSource::returning(json!([]));

    let resp = respond(
        "/api/suburb/properties?suburb=South+Yarra%20&property_type=%20house",
        &source,
    );

    assert_eq!(resp.status(), 200);
    let seen = source.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].suburb, "South Yarra");
    assert_eq!(seen[0].property_type.as_deref(), Some("house"));
}

#[test]
fn blank_property_type_is_dropped_and_echoed_as_null() {
    let source = FakeSource::returning(json!([]));

    let mut resp = respond("/api/suburb/properties?suburb=Kew&property_type=+", &source);

    let body = body_json(&mut resp);
    assert_eq!(body["summary"]["property_type"], json!(null));
    assert_eq!(source.seen.borrow()[0].property_type, None);
}

#[test]
fn property_type_is_echoed_in_summary() {
    let source = FakeSource::returning(json!([{"price": 500000}]));

    let mut resp = respond("/api/suburb/properties?suburb=Kew&property_type=unit", &source);

    let body = body_json(&mut resp);
    assert_eq!(body["summary"]["property_type"], json!("unit"));
    assert_eq!(body["summary"]["count"], json!(1));
}

#[test]
fn bare_list_payload_is_accepted() {
    let source = FakeSource::returning(json!([
        {"price": 650000, "address": {"street": "3 Rose St"}},
        {"price": 700000}
    ]));

    let mut resp = respond("/api/suburb/properties?suburb=Fitzroy", &source);

    let body = body_json(&mut resp);
    assert_eq!(body["summary"]["count"], json!(2));
    assert_eq!(body["listings"][0]["address"], json!("3 Rose St"));
}

#[test]
fn unexpected_payload_shape_yields_empty_batch() {
    let source = FakeSource::returning(json!({"message": "no data"}));

    let mut resp = respond("/api/suburb/properties?suburb=Fitzroy", &source);

    assert_eq!(resp.status(), 200);
    let body = body_json(&mut resp);
    assert_eq!(body["summary"]["count"], json!(0));
    assert_eq!(body["summary"]["median_price"], json!(null));
    assert_eq!(body["summary"]["price_bins"], json!([]));
    assert_eq!(body["listings"], json!([]));
}

#[test]
fn batch_without_prices_keeps_count() {
    let source = FakeSource::returning(json!({"results": [
        {"price_text": "Contact agent"},
        {"attributes": {"bedrooms": 2}},
        {}
    ]}));

    let mut resp = respond("/api/suburb/properties?suburb=Carlton", &source);

    let body = body_json(&mut resp);
    assert_eq!(body["summary"]["count"], json!(3));
    assert_eq!(body["summary"]["median_price"], json!(null));
    assert_eq!(body["summary"]["price_bins"], json!([]));
    assert_eq!(body["listings"][0]["price_text"], json!("Price on request"));
}

#[test]
fn upstream_failure_is_a_server_error() {
    let source = FakeSource::failing();

    let mut resp = respond("/api/suburb/properties?suburb=Richmond", &source);

    assert_eq!(resp.status(), 500);
    let body = body_json(&mut resp);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to fetch data:"), "{message}");
    assert_eq!(source.seen.borrow().len(), 1);
}

#[test]
fn repeated_suburb_uses_first_value() {
    let source = FakeSource::returning(json!([]));

    let resp = respond("/api/suburb/properties?suburb=Richmond&suburb=", &source);
    assert_eq!(resp.status(), 200);
    assert_eq!(source.seen.borrow()[0].suburb, "Richmond");

    let resp = respond("/api/suburb/properties?suburb=&suburb=Richmond", &source);
    assert_eq!(resp.status(), 400);
    assert_eq!(source.seen.borrow().len(), 1);
}
