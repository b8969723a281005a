//! Web error type and its JSON response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the relay handlers and server startup.
#[derive(Error, Debug)]
pub enum WebError {
    /// The request named a role outside the closed set.
    #[error("Invalid role selected")]
    InvalidRole,

    /// The request body could not be parsed as the expected JSON shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The upstream provider failed; its message is passed through.
    #[error("{0}")]
    Provider(String),

    /// Server configuration problem (bad bind address, missing credential).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for web operations.
pub type Result<T> = std::result::Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::InvalidRole => (StatusCode::BAD_REQUEST, self.to_string()),
            WebError::Provider(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            // The parse detail is logged server-side; the wire response
            // stays a generic JSON envelope
            WebError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "request body rejected");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error occurred.".to_string(),
                )
            }
            // Internal faults are logged server-side and reported generically
            WebError::Config(_) | WebError::Io(_) => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error occurred.".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
