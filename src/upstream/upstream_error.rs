#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(err.to_string())
        } else if err.is_decode() {
            UpstreamError::JsonParse(err.to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }
}
