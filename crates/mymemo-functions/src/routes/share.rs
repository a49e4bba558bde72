//! Share page route: HTML with Open Graph tags for one quote.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::error::FunctionError;
use crate::render;
use crate::state::AppState;

use super::markup_response;

/// Query parameters for the quote endpoints.
///
/// `id` stays a raw string at the boundary: an unparseable value is not a
/// request error, it selects a random quote.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteParams {
    pub id: Option<String>,
}

/// Handle `GET /share-quote`.
pub async fn share_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Response, FunctionError> {
    let quote = state.quotes.resolve(params.id.as_deref());
    tracing::debug!(quote_id = quote.id, "rendering share page");

    let image_url = format!(
        "{}/generate-quote-image?id={}",
        state.config.base_url, quote.id
    );
    let canonical_url = format!("{}/share-quote?id={}", state.config.base_url, quote.id);

    let markup = render::page::share_page(quote, &image_url, &canonical_url, &state.config.app_url);

    Ok(markup_response(
        markup.into_string(),
        "text/html; charset=utf-8",
        "public, max-age=3600",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::http::header;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn share_with_id_returns_html_for_that_quote() {
        let state = test_state();
        let response = share_quote(
            State(state),
            Query(QuoteParams {
                id: Some("0".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600"
        );

        let body = body_of(response).await;
        assert!(body.contains("generate-quote-image?id=0"));
        assert!(body.contains(mymemo_core::QUOTES[0].author));
    }

    #[tokio::test]
    async fn share_without_id_links_an_in_range_image() {
        let state = test_state();
        let response = share_quote(State(state), Query(QuoteParams::default()))
            .await
            .unwrap();
        let body = body_of(response).await;

        assert_eq!(body.matches("<title>").count(), 1);

        let marker = "generate-quote-image?id=";
        let start = body.find(marker).expect("og:image URL present") + marker.len();
        let id: usize = body[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap();
        assert!(id < mymemo_core::QUOTES.len());
    }

    #[tokio::test]
    async fn share_with_garbage_id_still_renders() {
        let state = test_state();
        let response = share_quote(
            State(state),
            Query(QuoteParams {
                id: Some("not-a-number".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
