//! Tag suggestion route: propose tags and a category for a note.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::backend::AuthUser;
use crate::clients::{ChatClient, ChatRequest, TokenUsage};
use crate::error::FunctionError;
use crate::prompts;
use crate::state::AppState;

use super::record_usage;

/// Request body for `POST /ai-suggest-tags`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTagsRequest {
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub existing_categories: Vec<String>,
}

/// The model's JSON answer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionPayload {
    #[serde(default)]
    suggested_tags: Vec<String>,
    #[serde(default)]
    suggested_category: String,
    #[serde(default)]
    reason: String,
}

/// Suggestions relayed to the client.
#[derive(Debug, Serialize)]
pub struct Suggestions {
    pub tags: Vec<String>,
    pub category: String,
    pub reason: String,
}

/// Response body for `POST /ai-suggest-tags`.
#[derive(Debug, Serialize)]
pub struct SuggestTagsResponse {
    pub success: bool,
    pub suggestions: Suggestions,
    pub usage: TokenUsage,
}

/// Handle `POST /ai-suggest-tags`.
pub async fn ai_suggest_tags(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SuggestTagsRequest>,
) -> Result<Json<SuggestTagsResponse>, FunctionError> {
    if request.content.trim().is_empty() {
        return Err(FunctionError::BadRequest("content is required".to_string()));
    }

    let stored = state.backend.fetch_category_names(&user).await?;
    let categories = merge_categories(stored, &request.existing_categories);

    let (system, user_prompt) =
        prompts::suggest_tags_prompts(&categories, &request.title, &request.content);

    let client = ChatClient::from_state(&state)?;
    let outcome = client
        .complete(ChatRequest {
            system,
            user: user_prompt,
            temperature: 0.5,
            max_tokens: 500,
            json_response: true,
        })
        .await?;

    let payload: SuggestionPayload = serde_json::from_str(&outcome.text).map_err(|err| {
        FunctionError::Upstream(format!("model returned malformed JSON: {err}"))
    })?;

    tracing::info!(
        user_id = %user.id,
        tag_count = payload.suggested_tags.len(),
        "tag suggestion completed"
    );

    record_usage(&state, &user, "suggest_tags", &outcome.usage).await;

    Ok(Json(SuggestTagsResponse {
        success: true,
        suggestions: Suggestions {
            tags: payload.suggested_tags,
            category: payload.suggested_category,
            reason: payload.reason,
        },
        usage: outcome.usage,
    }))
}

/// Merge backend-stored category names with the request's, first
/// occurrence wins.
fn merge_categories(stored: Vec<String>, requested: &[String]) -> Vec<String> {
    let mut merged = stored;
    for name in requested {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}
