use crate::errors::ServerError;
use crate::responses::json::json_error;
use astra::Response;

/// Convert a ServerError into a JSON `{"error": ...}` response.
pub fn error_to_response(err: ServerError) -> Response {
    if let ServerError::Upstream(ref e) = err {
        tracing::error!(error = %e, "upstream fetch failed");
    }

    json_error(err.status(), &err.to_string())
}
