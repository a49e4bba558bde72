//! Quote card image route: SVG for one quote.

use axum::extract::{Query, State};
use axum::response::Response;

use crate::error::FunctionError;
use crate::render;
use crate::state::AppState;

use super::markup_response;
use super::share::QuoteParams;

/// Handle `GET /generate-quote-image`.
///
/// The card for a given id never changes, so it is served with a one-year
/// Cache-Control; the random-quote variant shares the same header because
/// crawlers always request the id-pinned URL from the share page.
pub async fn generate_quote_image(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Response, FunctionError> {
    let quote = state.quotes.resolve(params.id.as_deref());
    tracing::debug!(quote_id = quote.id, "rendering quote card");

    let svg = render::card::quote_svg(quote);

    Ok(markup_response(
        svg,
        "image/svg+xml; charset=utf-8",
        "public, max-age=31536000",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::http::header;

    #[tokio::test]
    async fn image_for_quote_zero_contains_its_author() {
        let state = test_state();
        let response = generate_quote_image(
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
            "image/svg+xml; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=31536000"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains(mymemo_core::QUOTES[0].author));
        assert!(body.starts_with("<?xml"));
    }

    #[tokio::test]
    async fn image_without_id_renders_some_quote() {
        let state = test_state();
        let response = generate_quote_image(State(state), Query(QuoteParams::default()))
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
