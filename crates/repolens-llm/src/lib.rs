//! # Repolens LLM
//!
//! Chat-completion access for the relay endpoints and the CLI: a
//! [`ChatProvider`] trait, an OpenAI-compatible implementation, prompt
//! construction for the explain and summary flows, and a mock provider for
//! tests.
//!
//! The provider always returns a typed result; callers decide whether a
//! failure becomes an error response or a fallback string.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod mock;
pub mod prompts;
mod provider;

pub use error::{LlmError, LlmResult};
pub use mock::MockChatProvider;
pub use provider::{ChatProvider, OpenAiChatProvider};

use repolens_config::LlmConfig;

/// Create a chat provider from the LLM config section.
///
/// Fails when no API credential is available from the config file or the
/// environment.
pub fn create_chat_provider(config: &LlmConfig) -> LlmResult<Box<dyn ChatProvider>> {
    let api_key = config
        .api_key()
        .map_err(|e| LlmError::ConfigError(e.to_string()))?;
    let provider = OpenAiChatProvider::new(
        api_key,
        Some(config.endpoint()),
        config.model(),
        config.timeout_secs(),
    );
    Ok(Box::new(provider))
}
