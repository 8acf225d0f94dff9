use crate::clients::chat::{ChatClient, ChatConfig};
use crate::clients::mock::{MockClient, MockHandle};
use crate::core::{CompletionClient, CompletionRequest};
use crate::error::AIError;
use async_trait::async_trait;
use std::sync::Arc;

/// Type-erased, cheaply clonable client shared by every service of a session.
#[derive(Debug, Clone)]
pub struct FlexibleClient {
    inner: Arc<dyn CompletionClient>,
}

impl FlexibleClient {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self {
            inner: Arc::from(client),
        }
    }

    /// Create a client for a real provider using an explicit configuration
    pub fn chat(config: ChatConfig) -> Result<Self, AIError> {
        Ok(Self::new(Box::new(ChatClient::new(config)?)))
    }

    /// Create a FlexibleClient with a mock and return the handle for configuration
    pub fn mock() -> (Self, Arc<MockHandle>) {
        let (mock_client, handle) = MockClient::new();
        (Self::new(Box::new(mock_client)), handle)
    }
}

#[async_trait]
impl CompletionClient for FlexibleClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        self.inner.complete(request).await
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}
