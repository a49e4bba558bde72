//! OpenAI chat-completion and embedding client.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::FunctionError;

use super::{ChatOutcome, ChatRequest, TokenUsage, missing_key, upstream_error};

/// Typed wrapper over the OpenAI HTTP API.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    embedding_model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmbeddingBody<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    data: Vec<EmbeddingRow>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

impl OpenAiClient {
    /// Build a client from configuration; fails when the API key is unset.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Result<Self, FunctionError> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| missing_key("OPENAI_API_KEY"))?;
        Ok(Self {
            http,
            base_url: config.openai_base_url.clone(),
            api_key,
            model: config.openai_model.clone(),
            embedding_model: config.embedding_model.clone(),
        })
    }

    /// Run one chat completion.
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatOutcome, FunctionError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_response.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(upstream_error("OpenAI", status, &detail));
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(ChatOutcome {
            text,
            usage: parsed.usage.unwrap_or_default(),
        })
    }

    /// Generate an embedding for `input`.
    ///
    /// The vector itself is opaque to this service; callers only ever check
    /// that one came back and account for the token usage.
    pub async fn embed(&self, input: &str) -> Result<(Vec<f32>, TokenUsage), FunctionError> {
        let body = EmbeddingBody {
            model: &self.embedding_model,
            input,
        };

        let response = self
            .http
            .post(format!("{}/v1/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(upstream_error("OpenAI Embedding", status, &detail));
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|row| row.embedding)
            .unwrap_or_default();

        Ok((embedding, parsed.usage.unwrap_or_default()))
    }
}
