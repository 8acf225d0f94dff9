use crate::core::CompletionRequest;
use async_trait::async_trait;
use std::fmt::Debug;

/// Receives every completed exchange, e.g. to keep a transcript of a session.
#[async_trait]
pub trait Interceptor: Send + Sync + Debug {
    async fn save(&self, request: &CompletionRequest, response: &str) -> std::io::Result<()>;
}

pub mod file;
pub use file::FileInterceptor;
