//! Admin post moderation handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use posthub_core::error::AppError;
use posthub_core::types::pagination::{PageRequest, PageResponse};
use posthub_entity::post::Post;

use crate::dto::request::{PostListQuery, RejectPostRequest};
use crate::error::ApiError;
use crate::extractors::AuthAccount;
use crate::state::AppState;

/// GET /api/admin/posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthAccount,
    Query(query): Query<PostListQuery>,
) -> Result<Json<PageResponse<Post>>, ApiError> {
    let page = PageRequest::new(query.page, query.limit);
    let posts = state
        .post_service
        .list_all(&auth, query.status, page)
        .await?;

    Ok(Json(posts))
}

/// PATCH /api/admin/posts/{id}/approve
pub async fn approve_post(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let post = state.post_service.approve(&auth, id).await?;
    Ok(Json(post))
}

/// PATCH /api/admin/posts/{id}/reject
pub async fn reject_post(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(id): Path<Uuid>,
    Json(req): Json<RejectPostRequest>,
) -> Result<Json<Post>, ApiError> {
    let reason = req
        .reason
        .as_deref()
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::validation("Reason is required"))?;

    let post = state.post_service.reject(&auth, id, reason).await?;
    Ok(Json(post))
}
