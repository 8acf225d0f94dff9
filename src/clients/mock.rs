use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    core::{CompletionClient, CompletionRequest},
    error::AIError,
};

/// A scripted reply: either text or a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    Text(String),
    Error(String),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<(String, MockResponse)>,
    queue: VecDeque<MockResponse>,
    prompts: Vec<String>,
}

/// Control side of a [`MockClient`].
///
/// Replies are chosen by the first rule whose needle occurs in the prompt; rules
/// are never consumed. Prompts matching no rule pop the queue. With the queue
/// empty the call fails with [`AIError::Mock`].
#[derive(Debug, Default)]
pub struct MockHandle {
    state: Mutex<MockState>,
}

impl MockHandle {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reply with `response` to every prompt containing `needle`.
    pub fn when(&self, needle: impl Into<String>, response: MockResponse) {
        self.lock().rules.push((needle.into(), response));
    }

    pub fn push(&self, response: MockResponse) {
        self.lock().queue.push_back(response);
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    fn respond(&self, prompt: &str) -> Result<String, AIError> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_string());

        let matched = state
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone());

        match matched.or_else(|| state.queue.pop_front()) {
            Some(MockResponse::Text(text)) => Ok(text),
            Some(MockResponse::Error(message)) => Err(AIError::Mock(message)),
            None => Err(AIError::Mock(format!("no scripted response for prompt: {}", prompt))),
        }
    }
}

/// Mock client for tests and offline runs.
#[derive(Debug, Clone)]
pub struct MockClient {
    handle: Arc<MockHandle>,
}

impl MockClient {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        let client = Self {
            handle: handle.clone(),
        };
        (client, handle)
    }

    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (client, handle) = Self::new();
        for response in responses {
            handle.push(response);
        }
        (client, handle)
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        self.handle.respond(&request.prompt)
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RequestKind, SamplingParams};

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(RequestKind::GrammarCheck, prompt, SamplingParams::question())
    }

    #[tokio::test]
    async fn rules_win_over_queue_and_are_not_consumed() {
        let (client, handle) = MockClient::with_responses(vec![MockResponse::text("queued")]);
        handle.when("grammar", MockResponse::text("ruled"));

        assert_eq!(client.complete(request("Check for grammar in: x")).await.unwrap(), "ruled");
        assert_eq!(client.complete(request("Check for grammar in: y")).await.unwrap(), "ruled");
        assert_eq!(client.complete(request("anything else")).await.unwrap(), "queued");
        assert!(matches!(client.complete(request("empty now")).await, Err(AIError::Mock(_))));
        assert_eq!(handle.call_count(), 4);
    }

    #[tokio::test]
    async fn scripted_errors_surface_as_mock_errors() {
        let (client, _handle) = MockClient::with_responses(vec![MockResponse::error("boom")]);
        match client.complete(request("x")).await {
            Err(AIError::Mock(message)) => assert_eq!(message, "boom"),
            other => panic!("expected mock error, got {:?}", other),
        }
    }
}
