//! The summary relay: single-shot README summarization.

use crate::state::AppState;
use crate::WebError;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use repolens_llm::prompts;
use serde::{Deserialize, Serialize};

/// Returned when the provider produces no usable summary. The endpoint
/// stays 200 in that case; the caller treats the fallback as display text.
pub const SUMMARY_FALLBACK: &str = "No summary generated.";

/// Request body for `POST /api/summary`. No validation is performed.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Decoded README markdown.
    pub readme: String,
}

/// Response body for the summary relay.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Summary text, or the fixed fallback.
    pub summary: String,
}

/// Routes for the summary relay.
pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/api/summary", post(summary_handler))
}

async fn summary_handler(
    State(state): State<AppState>,
    body: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, WebError> {
    // Provider failures fall back to a 200; a body that never parsed
    // still gets the JSON error envelope
    let Json(request) = body?;

    let prompt = prompts::summary_prompt(&request.readme);
    let summary = match state.provider.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(provider = state.provider.provider_name(), error = %e, "summary relay failed, using fallback");
            SUMMARY_FALLBACK.to_string()
        }
    };
    Ok(Json(SummaryResponse { summary }))
}
