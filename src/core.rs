//! The generation collaborator seam: a minimal completion client trait plus the
//! request shape every service sends through it.

use crate::error::AIError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Sampling knobs sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl SamplingParams {
    /// Used for topic/question generation and the language checks.
    #[must_use]
    pub const fn question() -> Self {
        Self {
            temperature: 1.0,
            max_tokens: 1024,
            top_p: 1.0,
        }
    }

    /// Used for reference answers: cooler and much shorter.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 150,
            top_p: 1.0,
        }
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::question()
    }
}

/// What a request asks the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    TopicQuestion,
    ReferenceAnswer,
    GrammarCheck,
    SpellingCheck,
}

impl RequestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopicQuestion => "topic-question",
            Self::ReferenceAnswer => "reference-answer",
            Self::GrammarCheck => "grammar-check",
            Self::SpellingCheck => "spelling-check",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-role prompt with its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub kind: RequestKind,
    pub prompt: String,
    pub sampling: SamplingParams,
}

impl CompletionRequest {
    pub fn new(kind: RequestKind, prompt: impl Into<String>, sampling: SamplingParams) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            sampling,
        }
    }
}

/// Low-level model client abstraction.
///
/// Implementors execute one non-streaming completion and return the raw model
/// text. All parsing happens in the services above it.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError>;

    /// Clone this client into a boxed trait object
    fn clone_box(&self) -> Box<dyn CompletionClient>;
}

impl Clone for Box<dyn CompletionClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl CompletionClient for Box<dyn CompletionClient> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        self.as_ref().complete(request).await
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        self.as_ref().clone_box()
    }
}
