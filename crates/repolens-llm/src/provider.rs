//! OpenAI-compatible chat completion provider.

use crate::error::{LlmError, LlmResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Something that can turn a prompt into a completion.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a single user-message chat completion and return its text.
    async fn complete(&self, prompt: &str) -> LlmResult<String>;

    /// Human-readable provider name for logs.
    fn provider_name(&self) -> &str;
}

/// Chat provider speaking the OpenAI chat-completions wire format.
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiChatProvider {
    /// Create a new provider. `base_url` defaults to the OpenAI API.
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        let api_request = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Relay the provider's own message when the body carries one
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&error_text) {
                return Err(LlmError::Provider(envelope.error.message));
            }
            return Err(LlmError::Provider(format!(
                "provider error ({status}): {error_text}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("no completion in response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// Chat-completions API response types

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
