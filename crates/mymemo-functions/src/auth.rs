//! Bearer token authentication middleware for the AI endpoints.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::FunctionError;
use crate::state::AppState;

/// Middleware that resolves a Bearer token to a backend user.
///
/// The token must be provided in the `Authorization` header as:
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the [`AuthUser`](crate::backend::AuthUser) is inserted into
/// the request extensions for handlers to extract.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, FunctionError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            tracing::debug!("missing or malformed authorization header");
            return Err(FunctionError::Unauthorized);
        }
    };

    let user = state.backend.verify_user(token).await?;
    tracing::debug!(user_id = %user.id, "request authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
