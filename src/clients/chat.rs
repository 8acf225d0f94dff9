use crate::config::{find_key, require_key};
use crate::core::{CompletionClient, CompletionRequest};
use crate::error::{AIError, CompletionError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::models::ChatModel;

/// OpenAI-compatible chat-completions providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Provider {
    #[default]
    Groq,
    #[value(name = "openai")]
    OpenAI,
    #[value(name = "deepseek")]
    DeepSeek,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Groq => write!(f, "Groq"),
            Provider::OpenAI => write!(f, "OpenAI"),
            Provider::DeepSeek => write!(f, "DeepSeek"),
        }
    }
}

impl Provider {
    /// The first provider, in Groq, OpenAI, DeepSeek order, whose API key is available.
    /// Falls back to Groq so that a missing key is reported against the default provider.
    #[must_use]
    pub fn detect() -> Self {
        [Self::Groq, Self::OpenAI, Self::DeepSeek]
            .into_iter()
            .find(|provider| find_key(provider.key_name()).is_some())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1/chat/completions",
            Self::OpenAI => "https://api.openai.com/v1/chat/completions",
            Self::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
        }
    }

    /// The environment variable holding this provider's API key
    #[must_use]
    pub const fn key_name(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
            Self::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }

    #[must_use]
    pub fn default_model(self) -> ChatModel {
        match self {
            Self::Groq => ChatModel::Llama3_70b,
            Self::OpenAI => ChatModel::Gpt4oMini,
            Self::DeepSeek => ChatModel::DeepSeekChat,
        }
    }

    fn error(self, err: CompletionError) -> AIError {
        match self {
            Self::Groq => AIError::Groq(err),
            Self::OpenAI => AIError::OpenAI(err),
            Self::DeepSeek => AIError::DeepSeek(err),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Configuration for [`ChatClient`]
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub provider: Provider,
    pub model: ChatModel,
    pub api_key: String,
    pub timeout: Duration,
}

impl ChatConfig {
    /// Build a config for `provider`, reading its key from the environment or `.env`.
    pub fn from_env(provider: Provider) -> Result<Self, AIError> {
        Ok(Self {
            provider,
            model: provider.default_model(),
            api_key: require_key(provider.key_name())?,
            timeout: Duration::from_secs(60),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: ChatModel) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug)]
pub struct ChatClient {
    config: ChatConfig,
    http: Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, AIError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| config.provider.error(CompletionError::Http(e.to_string())))?;

        info!(
            provider = %config.provider,
            model = %config.model.id(),
            "Creating new chat completions client"
        );
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn request_body(&self, request: CompletionRequest) -> ChatRequest<'_> {
        ChatRequest {
            model: self.config.model.id(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature: request.sampling.temperature,
            max_tokens: request.sampling.max_tokens,
            top_p: request.sampling.top_p,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionClient for ChatClient {
    #[instrument(skip(self, request), fields(prompt_len = request.prompt.len(), model = %self.config.model.id()))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        let provider = self.config.provider;
        let body = self.request_body(request);

        debug!(provider = %provider, "Sending chat completions request");
        let response = self
            .http
            .post(provider.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                if e.is_timeout() {
                    provider.error(CompletionError::Timeout)
                } else {
                    provider.error(CompletionError::Http(e.to_string()))
                }
            })?;

        debug!(status = %response.status(), "Received chat completions response");

        if response.status() == 429 {
            warn!("Rate limit exceeded");
            return Err(provider.error(CompletionError::RateLimit));
        }

        if response.status() == 401 {
            error!("Authentication failed");
            return Err(provider.error(CompletionError::Authentication));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Chat completions API error");
            return Err(provider.error(CompletionError::Api(error_text)));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse chat completions response JSON");
            provider.error(CompletionError::Http(e.to_string()))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                error!("No choices in response");
                provider.error(CompletionError::Api("No choices in response".to_string()))
            })?;

        info!(response_len = content.len(), "Received completion");
        Ok(content)
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}
