//! Mock chat provider for tests.

use crate::error::LlmResult;
use crate::provider::ChatProvider;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A [`ChatProvider`] that records every prompt and serves scripted
/// results. Clones share the same script and recording.
#[derive(Clone, Default)]
pub struct MockChatProvider {
    prompts: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<LlmResult<String>>>>,
    default_response: String,
}

impl MockChatProvider {
    /// A mock that answers every prompt with a fixed default.
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default_response: default_response.into(),
        }
    }

    /// Queue the result for the next completion; queued results are served
    /// in order before the default kicks back in.
    pub fn push_result(&self, result: LlmResult<String>) {
        self.responses.lock().unwrap().push_back(result);
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// How many completions have been requested.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(result) = self.responses.lock().unwrap().pop_front() {
            return result;
        }
        Ok(self.default_response.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LlmError;

    #[tokio::test]
    async fn serves_scripted_results_then_default() {
        let mock = MockChatProvider::new("default answer");
        mock.push_result(Ok("first".to_string()));
        mock.push_result(Err(LlmError::Provider("boom".to_string())));

        assert_eq!(mock.complete("a").await.unwrap(), "first");
        assert_eq!(
            mock.complete("b").await.unwrap_err(),
            LlmError::Provider("boom".to_string())
        );
        assert_eq!(mock.complete("c").await.unwrap(), "default answer");
        assert_eq!(mock.prompts(), ["a", "b", "c"]);
        assert_eq!(mock.call_count(), 3);
    }
}
