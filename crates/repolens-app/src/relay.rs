//! HTTP client for the relay endpoints.

use repolens_core::{Role, Transcript};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// Errors from relay calls.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The relay answered with an `{"error": …}` payload; the message is
    /// what the server chose to report.
    #[error("{0}")]
    Api(String),

    /// The relay answered with neither a result nor an error payload.
    #[error("unexpected response from relay: {0}")]
    InvalidResponse(String),
}

/// Client for `/api/explain` and `/api/summary`.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ExplainEnvelope {
    explanation: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    summary: Option<String>,
    error: Option<String>,
}

impl RelayClient {
    /// Create a client for a relay server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Request a role-targeted explanation of `code`, including the full
    /// conversation so far for context.
    pub async fn explain(
        &self,
        code: &str,
        role: Role,
        conversation: &Transcript,
        question: &str,
    ) -> Result<String, RelayError> {
        let body = json!({
            "code": code,
            "role": role,
            "conversation": conversation,
            "question": question,
        });

        let url = format!("{}/api/explain", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Http(e.to_string()))?;

        let envelope: ExplainEnvelope = response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        match envelope {
            ExplainEnvelope {
                explanation: Some(text),
                ..
            } => Ok(text),
            ExplainEnvelope {
                error: Some(message),
                ..
            } => Err(RelayError::Api(message)),
            _ => Err(RelayError::InvalidResponse(
                "neither explanation nor error in response".to_string(),
            )),
        }
    }

    /// Request a short summary of a README.
    pub async fn summary(&self, readme: &str) -> Result<String, RelayError> {
        let url = format!("{}/api/summary", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "readme": readme }))
            .send()
            .await
            .map_err(|e| RelayError::Http(e.to_string()))?;

        let envelope: SummaryEnvelope = response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        match envelope {
            SummaryEnvelope {
                summary: Some(text),
                ..
            } => Ok(text),
            SummaryEnvelope {
                error: Some(message),
                ..
            } => Err(RelayError::Api(message)),
            _ => Err(RelayError::InvalidResponse(
                "no summary in response".to_string(),
            )),
        }
    }
}
