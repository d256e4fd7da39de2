//! Token gateway middleware.
//!
//! Every authenticated route passes through here: the bearer token is
//! verified against its session, the session's inactivity window slides
//! forward, and the rotated replacement token rides back on the
//! `x-refresh-token` response header. Clients must persist the newest
//! value and present it on the next call.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use posthub_core::error::AppError;
use posthub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Response header carrying the rotated bearer token.
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Authenticates the request and injects the principal into request
/// extensions for the [`AuthAccount`](crate::extractors::AuthAccount)
/// extractor.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::unauthenticated("Missing bearer credentials"))?;

    let pass = state.token_gateway.authenticate(&token).await?;

    let ctx = RequestContext::new(
        pass.claims.account_id,
        pass.claims.session_id,
        pass.claims.role,
        pass.claims.email.clone(),
    );
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&pass.rotated_token) {
        response.headers_mut().insert(REFRESH_TOKEN_HEADER, value);
    }

    Ok(response)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
