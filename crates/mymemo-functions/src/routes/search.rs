//! AI search route: embedding-backed query plus LLM re-ranking over the
//! user's notes.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::backend::{AuthUser, NoteRow};
use crate::clients::{ChatClient, ChatRequest, OpenAiClient, TokenUsage};
use crate::error::FunctionError;
use crate::prompts;
use crate::state::AppState;

use super::record_usage;

/// How many notes to pull from the backend for ranking.
const RANKING_CANDIDATES: usize = 100;

/// How many characters of each note body the ranking model sees.
const CONTENT_PREVIEW_CHARS: usize = 500;

/// Request body for `POST /ai-search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

/// Response body for `POST /ai-search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<NoteRow>,
    pub total_results: usize,
    pub explanation: String,
}

/// The slice of a note the ranking model is shown.
#[derive(Debug, Serialize)]
struct NoteSummary<'a> {
    id: &'a str,
    title: Option<&'a str>,
    content: Option<String>,
    tags: &'a [String],
}

impl<'a> NoteSummary<'a> {
    fn from_row(row: &'a NoteRow) -> Self {
        Self {
            id: &row.id,
            title: row.title.as_deref(),
            content: row
                .content
                .as_deref()
                .map(|c| c.chars().take(CONTENT_PREVIEW_CHARS).collect()),
            tags: &row.tags,
        }
    }
}

/// The ranking the model answers with.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankingResult {
    #[serde(default)]
    ranked_ids: Vec<String>,
    #[serde(default)]
    explanation: String,
}

/// Handle `POST /ai-search`.
///
/// The embedding step always uses OpenAI (the only configured provider with
/// an embeddings endpoint); the ranking step uses the configured chat
/// provider. The embedding vector itself is unused beyond existence — the
/// semantic index lives in the backend, not here.
pub async fn ai_search(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, FunctionError> {
    if request.query.trim().is_empty() {
        return Err(FunctionError::BadRequest("query is required".to_string()));
    }

    let openai = OpenAiClient::from_config(&state.config, state.http.clone())?;
    let (embedding, embed_usage) = openai.embed(&request.query).await?;
    if embedding.is_empty() {
        return Err(FunctionError::Upstream(
            "failed to generate embedding".to_string(),
        ));
    }

    let notes = state.backend.fetch_notes(&user, RANKING_CANDIDATES).await?;

    let summaries: Vec<NoteSummary> = notes.iter().map(NoteSummary::from_row).collect();
    let notes_json = serde_json::to_string_pretty(&summaries)?;
    let (system, user_prompt) = prompts::search_ranking_prompts(&request.query, notes_json);

    let chat = ChatClient::from_state(&state)?;
    let outcome = chat
        .complete(ChatRequest {
            system,
            user: user_prompt,
            temperature: 0.3,
            max_tokens: 1000,
            json_response: true,
        })
        .await?;

    let ranking: RankingResult = serde_json::from_str(&outcome.text).unwrap_or_default();
    let results = reorder_notes(&notes, &ranking.ranked_ids, request.limit);

    tracing::info!(
        user_id = %user.id,
        candidates = notes.len(),
        ranked = results.len(),
        "search request completed"
    );

    let combined = combined_usage(&embed_usage, &outcome.usage);
    record_usage(&state, &user, "search", &combined).await;

    Ok(Json(SearchResponse {
        success: true,
        total_results: results.len(),
        results,
        explanation: ranking.explanation,
    }))
}

/// Reorder notes by the model's ranking, dropping unknown ids and
/// truncating to `limit`.
fn reorder_notes(notes: &[NoteRow], ranked_ids: &[String], limit: usize) -> Vec<NoteRow> {
    ranked_ids
        .iter()
        .filter_map(|id| notes.iter().find(|note| &note.id == id))
        .take(limit)
        .cloned()
        .collect()
}

/// Sum embedding and ranking usage for a single accounting record.
fn combined_usage(embed: &TokenUsage, ranking: &TokenUsage) -> TokenUsage {
    TokenUsage {
        prompt_tokens: embed.total_tokens + ranking.prompt_tokens,
        completion_tokens: ranking.completion_tokens,
        total_tokens: embed.total_tokens + ranking.total_tokens,
    }
}
