use crate::upstream::{ListingSource, SuburbQuery, UpstreamError};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::cell::RefCell;
use std::io::Read;

/// Stands in for the Microburbs API. `None` simulates a failed fetch.
pub struct FakeSource {
    payload: Option<Value>,
    pub seen: RefCell<Vec<SuburbQuery>>,
}

impl FakeSource {
    pub fn returning(payload: Value) -> Self {
        Self {
            payload: Some(payload),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ListingSource for FakeSource {
    fn suburb_properties(&self, query: &SuburbQuery) -> Result<Value, UpstreamError> {
        self.seen.borrow_mut().push(query.clone());
        self.payload
            .clone()
            .ok_or_else(|| UpstreamError::Network("connection refused".into()))
    }
}

/// Build a GET request for `uri`.
pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn body_json(resp: &mut Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
