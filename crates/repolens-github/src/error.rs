//! GitHub client error types.

use thiserror::Error;

/// Errors from GitHub API calls.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// GitHub answered with a non-success status.
    #[error("GitHub API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when unreadable.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to parse GitHub response: {0}")]
    InvalidResponse(String),

    /// README content could not be base64-decoded into UTF-8 text.
    #[error("failed to decode README content: {0}")]
    Decode(String),
}

/// Result alias for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;
