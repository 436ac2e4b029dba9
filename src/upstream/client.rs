// client.rs
use crate::config::Config;
use crate::upstream::{ListingSource, SuburbQuery, UpstreamError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Instant;

const USER_AGENT: &str = concat!("suburb-explorer/", env!("CARGO_PKG_VERSION"));
const SUBURB_PROPERTIES_PATH: &str = "/suburb/properties";

/// Blocking client for the Microburbs report API.
pub struct ListingsClient {
    client: Client,
    api_base: String,
    api_token: String,
}

impl ListingsClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| UpstreamError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// One GET, no retries. Non-2xx statuses come back as errors with the body attached.
    pub fn fetch_suburb_properties(&self, query: &SuburbQuery) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.api_base, SUBURB_PROPERTIES_PATH);
        let start = Instant::now();

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(query)
            .send()?;

        let status = resp.status();
        tracing::debug!(%url, %status, elapsed = ?start.elapsed(), "upstream responded");

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| UpstreamError::JsonParse(e.to_string()))
    }
}

impl ListingSource for ListingsClient {
    fn suburb_properties(&self, query: &SuburbQuery) -> Result<Value, UpstreamError> {
        self.fetch_suburb_properties(query)
    }
}
