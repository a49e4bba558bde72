//! Google Gemini generateContent client.
//!
//! Gemini's wire format differs from OpenAI's (camelCase fields, a separate
//! `systemInstruction` block, usage under `usageMetadata`); this module maps
//! it onto the shared [`ChatRequest`]/[`ChatOutcome`] surface.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::FunctionError;

use super::{ChatOutcome, ChatRequest, TokenUsage, missing_key, upstream_error};

/// Typed wrapper over the Gemini HTTP API.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

impl From<UsageMetadata> for TokenUsage {
    fn from(meta: UsageMetadata) -> Self {
        Self {
            prompt_tokens: meta.prompt_token_count,
            completion_tokens: meta.candidates_token_count,
            total_tokens: meta.total_token_count,
        }
    }
}

impl GeminiClient {
    /// Build a client from configuration; fails when the API key is unset.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Result<Self, FunctionError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| missing_key("GEMINI_API_KEY"))?;
        Ok(Self {
            http,
            base_url: config.gemini_base_url.clone(),
            api_key,
            model: config.gemini_model.clone(),
        })
    }

    /// Run one chat completion.
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatOutcome, FunctionError> {
        let body = GenerateContentBody {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.user,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: request.json_response.then_some("application/json"),
            },
        };

        let response = self
            .http
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(upstream_error("Gemini", status, &detail));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(ChatOutcome {
            text,
            usage: parsed.usage_metadata.map(Into::into).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_serializes_camel_case_wire_shape() {
        let body = GenerateContentBody {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "system" }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "質問" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.5,
                max_output_tokens: 500,
                response_mime_type: Some("application/json"),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(json["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn response_parses_candidates_and_usage() {
        let raw = r#"{
            "candidates": [{"content": {"parts": [{"text": "提案1"}, {"text": "提案2"}]}}],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let usage: TokenUsage = parsed.usage_metadata.unwrap().into();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.completion_tokens, 8);
        assert_eq!(usage.total_tokens, 20);
    }

    #[test]
    fn response_tolerates_empty_body() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
        assert!(parsed.usage_metadata.is_none());
    }

    #[test]
    fn multi_part_candidate_text_is_concatenated() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "ab"}, {"text": "cd"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        assert_eq!(text, "abcd");
    }
}
