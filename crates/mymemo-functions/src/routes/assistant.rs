//! AI assistant route: note improvement, summarization, expansion,
//! translation, and title suggestions via chat completion.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::backend::AuthUser;
use crate::clients::{ChatClient, ChatRequest, TokenUsage};
use crate::error::FunctionError;
use crate::prompts::{self, AssistantAction};
use crate::state::AppState;

use super::record_usage;

/// Request body for `POST /ai-assistant`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub action: AssistantAction,
    pub content: String,
    /// Content language; accepted for wire compatibility, prompts are
    /// Japanese regardless.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

/// Response body for `POST /ai-assistant`.
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub success: bool,
    pub result: String,
    pub action: AssistantAction,
    pub usage: TokenUsage,
}

/// Handle `POST /ai-assistant`.
pub async fn ai_assistant(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, FunctionError> {
    if request.content.trim().is_empty() {
        return Err(FunctionError::BadRequest("content is required".to_string()));
    }

    let (system, user_prompt) = prompts::assistant_prompts(
        request.action,
        &request.content,
        &request.target_language,
    );

    let client = ChatClient::from_state(&state)?;
    let outcome = client
        .complete(ChatRequest {
            system,
            user: user_prompt,
            temperature: 0.7,
            max_tokens: 2000,
            json_response: false,
        })
        .await?;

    tracing::info!(
        user_id = %user.id,
        action = request.action.as_str(),
        total_tokens = outcome.usage.total_tokens,
        "assistant request completed"
    );

    record_usage(&state, &user, request.action.as_str(), &outcome.usage).await;

    Ok(Json(AssistantResponse {
        success: true,
        result: outcome.text,
        action: request.action,
        usage: outcome.usage,
    }))
}
