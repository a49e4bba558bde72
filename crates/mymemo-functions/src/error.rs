//! Error types and JSON response formatting for the edge functions.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Edge function error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// Authentication failed (missing or invalid bearer token).
    #[error("unauthorized")]
    Unauthorized,

    /// Invalid request parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The AI provider returned a rate-limit signal; passed through as 429.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The AI provider or backend rejected the request.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Outbound HTTP request failed before a response arrived.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error (configuration, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone())),
            Self::RateLimited(msg) => {
                tracing::warn!(detail = %msg, "provider rate limit passed through");
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited", Some(msg.clone()))
            }
            Self::Upstream(msg) => {
                tracing::error!(detail = %msg, "upstream error");
                (StatusCode::BAD_REQUEST, "upstream", Some(msg.clone()))
            }
            Self::Http(err) => {
                tracing::error!(error = %err, "outbound request failed");
                (
                    StatusCode::BAD_REQUEST,
                    "upstream",
                    Some("The upstream service could not be reached".to_string()),
                )
            }
            Self::Serialization(err) => {
                tracing::error!(error = %err, "serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "serialization_error",
                    Some(err.to_string()),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Some(err.to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
