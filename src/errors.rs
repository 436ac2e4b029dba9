// errors.rs
use crate::upstream::UpstreamError;
use astra::Response;

/// Errors originating from either the server logic
/// (routing, validation) or the upstream listings API.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to fetch data: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) | ServerError::InternalError => 500,
        }
    }
}
