//! The explain relay: role-prefixed code explanation.

use crate::state::AppState;
use crate::WebError;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use repolens_core::{Role, Transcript};
use repolens_llm::prompts;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/explain`.
///
/// `conversation` and `question` are accepted for context but the minimal
/// contract only requires `code` and `role`.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    /// Source code to explain.
    pub code: String,
    /// Audience role identifier; validated against the closed set.
    pub role: String,
    /// Prior question/answer turns for the selected file.
    #[serde(default)]
    pub conversation: Option<Transcript>,
    /// The newest question, redundant with the conversation's last turn.
    #[serde(default)]
    pub question: Option<String>,
}

/// Response body for a successful explanation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResponse {
    /// The completion text.
    pub explanation: String,
}

/// Routes for the explain relay.
pub fn explain_routes() -> Router<AppState> {
    Router::new().route("/api/explain", post(explain_handler))
}

async fn explain_handler(
    State(state): State<AppState>,
    body: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, WebError> {
    // An unparseable body becomes the generic JSON error envelope rather
    // than the extractor's plain-text rejection
    let Json(request) = body?;

    // Role validation is the only validation performed; the code payload
    // is forwarded as-is.
    let role: Role = request.role.parse().map_err(|_| WebError::InvalidRole)?;

    tracing::debug!(
        role = %role,
        code_bytes = request.code.len(),
        turns = request.conversation.as_ref().map_or(0, Transcript::len),
        question = request.question.as_deref().unwrap_or(""),
        "explain request"
    );

    let prompt = prompts::explain_prompt(role, &request.code);
    match state.provider.complete(&prompt).await {
        Ok(explanation) => Ok(Json(ExplainResponse { explanation })),
        Err(e) => {
            tracing::error!(provider = state.provider.provider_name(), error = %e, "explain relay failed");
            Err(WebError::Provider(e.to_string()))
        }
    }
}
