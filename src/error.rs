//! Error types for genrelay.
//!
//! Only the terminal outcome of a relay call is visible to the caller.
//! Per-candidate upstream failures are swallowed inside the fallback loop;
//! the most recent failure message is carried into `Exhausted`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type alias for genrelay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for genrelay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server-held credential is not configured. Fatal to the request,
    /// not to the process; no upstream call is attempted.
    #[error("API key not configured on the server")]
    MissingCredential,

    /// Every model candidate failed. Carries the last recorded failure
    /// message, if any attempt produced one.
    #[error("Could not generate the script.{}", .last_error.as_deref().map(|m| format!(" {}", m)).unwrap_or_default())]
    Exhausted { last_error: Option<String> },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Both configuration and exhaustion errors surface as a 500 with a
        // flat JSON error string; clients get no structured error codes.
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
