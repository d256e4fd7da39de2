//! Post handlers — submission and the caller's own listings.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use posthub_core::error::AppError;
use posthub_core::types::pagination::{PageRequest, PageResponse};
use posthub_entity::post::Post;

use crate::dto::request::{CreatePostRequest, PostListQuery};
use crate::error::ApiError;
use crate::extractors::AuthAccount;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthAccount,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state
        .post_service
        .submit(&auth, &req.title, &req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/my-posts
pub async fn my_posts(
    State(state): State<AppState>,
    auth: AuthAccount,
    Query(query): Query<PostListQuery>,
) -> Result<Json<PageResponse<Post>>, ApiError> {
    let page = PageRequest::new(query.page, query.limit);
    let posts = state
        .post_service
        .list_own(&auth, query.status, page)
        .await?;

    Ok(Json(posts))
}
