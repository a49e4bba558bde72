//! Typed client for the hosted backend (Supabase-style auth + REST storage).
//!
//! The backend owns user identity, note storage, and the AI usage log; this
//! service only talks to it over its HTTP surface. Row-level security is
//! enforced by the backend, so user-scoped queries forward the caller's own
//! bearer token alongside the service's anon key.

use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::FunctionError;

/// An authenticated user, resolved from a bearer token.
///
/// The token is kept so user-scoped backend queries can be made
/// on the caller's behalf.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Backend user id (UUID).
    pub id: String,
    /// The bearer token the user presented.
    pub token: String,
}

/// A note row as returned by the backend REST endpoint.
///
/// Fields are tolerant of nulls; the backend schema allows most of them
/// to be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRow {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One AI usage accounting record, inserted per AI request.
#[derive(Debug, Clone, Serialize)]
pub struct UsageRecord {
    pub user_id: String,
    pub action: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
    pub cost_estimate: f64,
    pub created_at: String,
}

impl UsageRecord {
    /// Rough per-token cost estimate, matching the original accounting.
    const COST_PER_TOKEN: f64 = 0.00001;

    /// Build a record for `user` performing `action` with the given token counts.
    pub fn new(user: &AuthUser, action: &str, input: u32, output: u32, total: u32) -> Self {
        Self {
            user_id: user.id.clone(),
            action: action.to_string(),
            input_tokens: input,
            output_tokens: output,
            total_tokens: total,
            cost_estimate: f64::from(total) * Self::COST_PER_TOKEN,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    name: String,
}

/// Thin typed client for the backend HTTP API.
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl Backend {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.backend_url.clone(),
            anon_key: config.backend_anon_key.clone(),
        }
    }

    /// Resolve a bearer token to a user identity.
    ///
    /// A 4xx from the auth endpoint means the token is absent/expired and
    /// maps to `Unauthorized`; anything else unexpected is an upstream error.
    pub async fn verify_user(&self, token: &str) -> Result<AuthUser, FunctionError> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FunctionError::Unauthorized);
        }
        if !status.is_success() {
            return Err(FunctionError::Upstream(format!(
                "auth endpoint returned {status}"
            )));
        }

        let payload: UserPayload = response.json().await?;
        Ok(AuthUser {
            id: payload.id,
            token: token.to_string(),
        })
    }

    /// Fetch up to `limit` of the user's live notes.
    pub async fn fetch_notes(
        &self,
        user: &AuthUser,
        limit: usize,
    ) -> Result<Vec<NoteRow>, FunctionError> {
        let response = self
            .http
            .get(format!("{}/rest/v1/notes", self.base_url))
            .query(&[
                (
                    "select",
                    "id,title,content,tags,category_id,created_at,updated_at",
                ),
                ("user_id", &format!("eq.{}", user.id)),
                ("deleted_at", "is.null"),
                ("limit", &limit.to_string()),
            ])
            .header("apikey", &self.anon_key)
            .bearer_auth(&user.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FunctionError::Upstream(format!(
                "notes query returned {status}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch the user's category names.
    pub async fn fetch_category_names(
        &self,
        user: &AuthUser,
    ) -> Result<Vec<String>, FunctionError> {
        let response = self
            .http
            .get(format!("{}/rest/v1/categories", self.base_url))
            .query(&[("select", "name"), ("user_id", &format!("eq.{}", user.id))])
            .header("apikey", &self.anon_key)
            .bearer_auth(&user.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FunctionError::Upstream(format!(
                "categories query returned {status}"
            )));
        }

        let rows: Vec<CategoryRow> = response.json().await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    /// Insert one AI usage record.
    ///
    /// Accounting must never fail the user's request; callers log and
    /// continue on error.
    pub async fn log_ai_usage(
        &self,
        user: &AuthUser,
        record: &UsageRecord,
    ) -> Result<(), FunctionError> {
        let response = self
            .http
            .post(format!("{}/rest/v1/ai_usage_log", self.base_url))
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&user.token)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FunctionError::Upstream(format!(
                "usage log insert returned {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthUser {
        AuthUser {
            id: "3f9c0f5e-1c9e-4f3a-9e0a-7c2d1b4a8f60".to_string(),
            token: "jwt".to_string(),
        }
    }

    #[test]
    fn usage_record_cost_estimate() {
        let record = UsageRecord::new(&test_user(), "improve", 120, 80, 200);
        assert_eq!(record.action, "improve");
        assert_eq!(record.input_tokens, 120);
        assert_eq!(record.output_tokens, 80);
        assert_eq!(record.total_tokens, 200);
        assert!((record.cost_estimate - 0.002).abs() < 1e-12);
    }

    #[test]
    fn usage_record_serializes_expected_columns() {
        let record = UsageRecord::new(&test_user(), "search", 0, 0, 0);
        let json = serde_json::to_value(&record).unwrap();
        for key in [
            "user_id",
            "action",
            "input_tokens",
            "output_tokens",
            "total_tokens",
            "cost_estimate",
            "created_at",
        ] {
            assert!(json.get(key).is_some(), "missing column {key}");
        }
    }

    #[test]
    fn note_row_tolerates_missing_fields() {
        let row: NoteRow = serde_json::from_str(r#"{"id":"n1"}"#).unwrap();
        assert_eq!(row.id, "n1");
        assert!(row.title.is_none());
        assert!(row.tags.is_empty());
    }

    #[test]
    fn note_row_parses_full_shape() {
        let row: NoteRow = serde_json::from_str(
            r#"{"id":"n1","title":"メモ","content":"本文","tags":["哲学"],
                "category_id":"c1","created_at":"2024-01-01T00:00:00Z",
                "updated_at":"2024-01-02T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(row.title.as_deref(), Some("メモ"));
        assert_eq!(row.tags, vec!["哲学"]);
    }
}
