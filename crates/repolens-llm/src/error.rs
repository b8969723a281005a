//! LLM provider error types.

use thiserror::Error;

/// Errors from chat-completion calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The provider reported an error; the message is relayed verbatim so
    /// callers can surface it to their own clients.
    #[error("{0}")]
    Provider(String),

    /// The provider responded but the body did not contain a completion.
    #[error("invalid response from provider: {0}")]
    InvalidResponse(String),

    /// The provider could not be constructed from configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Result alias for LLM operations.
pub type LlmResult<T> = Result<T, LlmError>;
