use crate::core::{CompletionClient, CompletionRequest};
use crate::error::AIError;
use crate::interceptors::Interceptor;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Forwards to an inner client and hands every successful exchange to an [`Interceptor`].
/// A failing interceptor is logged and never fails the request.
#[derive(Debug, Clone)]
pub struct RecordingClient<C: CompletionClient> {
    inner: C,
    interceptor: Arc<dyn Interceptor>,
}

impl<C: CompletionClient> RecordingClient<C> {
    pub fn new(inner: C, interceptor: Arc<dyn Interceptor>) -> Self {
        Self { inner, interceptor }
    }
}

#[async_trait]
impl<C: CompletionClient + Clone + 'static> CompletionClient for RecordingClient<C> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        let recorded = request.clone();
        let response = self.inner.complete(request).await?;

        if let Err(e) = self.interceptor.save(&recorded, &response).await {
            warn!(error = %e, kind = %recorded.kind, "Failed to record exchange");
        }

        Ok(response)
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}
