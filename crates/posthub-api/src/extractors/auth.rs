//! `AuthAccount` extractor — pulls the principal the gateway middleware
//! placed in request extensions.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use posthub_core::error::AppError;
use posthub_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub RequestContext);

impl AuthAccount {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthAccount {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthAccount)
            .ok_or_else(|| {
                AppError::unauthenticated("Missing authentication context").into()
            })
    }
}
