//! Shared state for the relay routes.

use repolens_llm::ChatProvider;
use std::sync::Arc;

/// State handed to every relay handler. Each invocation is stateless
/// beyond the shared provider handle.
#[derive(Clone)]
pub struct AppState {
    /// The chat-completion provider backing both relays.
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    /// Wrap a provider for use by the router.
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }
}
