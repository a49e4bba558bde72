//! Route definitions for the edge function service.
//!
//! ## Routes
//!
//! - `GET /share-quote` - HTML share page with social-preview meta tags
//! - `GET /generate-quote-image` - SVG quote card
//! - `GET /health` - Health check (JSON)
//! - `POST /ai-assistant` - Note assistance via chat completion (auth)
//! - `POST /ai-search` - Semantic note search (auth)
//! - `POST /ai-suggest-tags` - Tag/category suggestions (auth)

mod assistant;
mod health;
mod image;
mod search;
mod share;
mod suggest_tags;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use crate::auth;
use crate::backend::{AuthUser, UsageRecord};
use crate::clients::TokenUsage;
use crate::state::AppState;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    let ai_routes = Router::new()
        .route("/ai-assistant", post(assistant::ai_assistant))
        .route("/ai-search", post(search::ai_search))
        .route("/ai-suggest-tags", post(suggest_tags::ai_suggest_tags))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_user,
        ));

    Router::new()
        .route("/share-quote", get(share::share_quote))
        .route("/generate-quote-image", get(image::generate_quote_image))
        .route("/health", get(health::health_check))
        .merge(ai_routes)
        .with_state(state)
}

/// Build a cacheable markup response with content-type and ETag headers.
///
/// Both quote endpoints produce deterministic markup for a given id, so an
/// ETag over the body lets CDNs and crawlers revalidate cheaply.
pub(crate) fn markup_response(
    body: String,
    content_type: &'static str,
    cache_control: &'static str,
) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );

    let hash = xxhash_rust::xxh3::xxh3_64(body.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, body).into_response()
}

/// Insert a usage-accounting record for an AI request.
///
/// Accounting failures are logged and swallowed; they must never fail the
/// request that already produced a result for the user.
pub(crate) async fn record_usage(
    state: &AppState,
    user: &AuthUser,
    action: &str,
    usage: &TokenUsage,
) {
    let record = UsageRecord::new(
        user,
        action,
        usage.prompt_tokens,
        usage.completion_tokens,
        usage.total_tokens,
    );

    if let Err(err) = state.backend.log_ai_usage(user, &record).await {
        tracing::warn!(error = %err, action = action, "failed to record AI usage");
    }
}
