// src/tests/router_tests/dashboard_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, FakeSource};

#[test]
fn root_serves_dashboard_html() {
    let source = FakeSource::failing();

    let mut resp = handle(get("/"), &source).unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));

    let body = body_string(&mut resp);
    assert!(body.contains("Suburb Explorer"));
    assert!(source.seen.borrow().is_empty());
}
