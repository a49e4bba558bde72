//! Thin typed HTTP clients for the AI providers.
//!
//! Both providers expose the same narrow surface: a system/user prompt pair
//! in, assistant text plus token usage out. Provider selection is a config
//! concern; handlers only see [`ChatClient`].

pub mod gemini;
pub mod openai;

use serde::{Deserialize, Serialize};

use crate::config::AiProvider;
use crate::error::FunctionError;
use crate::state::AppState;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// Token usage counts, in the OpenAI field naming.
///
/// Gemini's `usageMetadata` is mapped into this shape so accounting and
/// response bodies are provider-independent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A single chat-completion request.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// System prompt.
    pub system: String,
    /// User prompt.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget.
    pub max_tokens: u32,
    /// Ask the provider to emit a JSON object instead of prose.
    pub json_response: bool,
}

/// The provider's answer, with usage for accounting.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Assistant message text (empty when the provider returned no content).
    pub text: String,
    /// Token usage reported by the provider.
    pub usage: TokenUsage,
}

/// Provider-dispatching chat client.
pub enum ChatClient {
    OpenAi(OpenAiClient),
    Gemini(GeminiClient),
}

impl ChatClient {
    /// Build the configured provider's client.
    ///
    /// Fails with a configuration error when the selected provider's API
    /// key is unset.
    pub fn from_state(state: &AppState) -> Result<Self, FunctionError> {
        match state.config.ai_provider {
            AiProvider::OpenAi => Ok(Self::OpenAi(OpenAiClient::from_config(
                &state.config,
                state.http.clone(),
            )?)),
            AiProvider::Gemini => Ok(Self::Gemini(GeminiClient::from_config(
                &state.config,
                state.http.clone(),
            )?)),
        }
    }

    /// Run one chat completion.
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatOutcome, FunctionError> {
        match self {
            Self::OpenAi(client) => client.complete(request).await,
            Self::Gemini(client) => client.complete(request).await,
        }
    }
}

/// Missing-key configuration error, shared by both clients.
pub(crate) fn missing_key(var: &str) -> FunctionError {
    FunctionError::Internal(anyhow::anyhow!("{var} is not configured"))
}

/// Map an upstream error status to the function error taxonomy.
///
/// 429 is passed through as a rate-limit signal; everything else is a
/// generic upstream failure. No retries.
pub(crate) fn upstream_error(provider: &str, status: reqwest::StatusCode, body: &str) -> FunctionError {
    tracing::error!(provider = provider, status = %status, body = %body, "provider request failed");
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        FunctionError::RateLimited(format!("{provider} API error: {status}"))
    } else {
        FunctionError::Upstream(format!("{provider} API error: {status}"))
    }
}
