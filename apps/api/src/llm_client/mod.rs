//! LLM Client: the single point of entry for chat-completion calls.
//!
//! No other module talks to the provider directly. The provider is any
//! OpenAI-compatible `/chat/completions` endpoint; base URL and key come from
//! configuration and are checked when a call is made, not at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const COMPLETIONS_PATH: &str = "/chat/completions";
/// Sampling temperature sent with every completion.
pub const TEMPERATURE: f64 = 0.7;
/// Upper bound on the length of a generated reply.
pub const MAX_TOKENS: u32 = 800;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider not configured: {0} is not set")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no choices")]
    NoChoices,

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}


impl CompletionResponse {
    /// Text of the first choice, if the provider returned any.
    pub fn first_text(&self) -> Result<&str, LlmError> {
        let choice = self.choices.first().ok_or(LlmError::NoChoices)?;
        choice
            .message
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// A backend able to turn an ordered message list into one reply.
///
/// Carried in `AppState` as `Arc<dyn ChatCompletion>`.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// reqwest-backed client for an OpenAI-compatible provider.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>, model: String) -> Self {
        Self::with_http_client(Client::new(), base_url, api_key, model)
    }

    /// Wraps an already configured reqwest client (timeouts, proxies).
    pub fn with_http_client(
        client: Client,
        base_url: Option<String>,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> Result<String, LlmError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(LlmError::NotConfigured("LLM_BASE_URL"))?;
        Ok(format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH))
    }

    /// Makes one call to the provider and returns the full response object.
    /// No retries: a failed call is reported to the caller as-is.
    pub async fn call(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, LlmError> {
        let endpoint = self.endpoint()?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::NotConfigured("LLM_API_KEY"))?;

        let request_body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response = self.call(messages).await?;
        response.first_text().map(str::to_owned)
    }
}
