//! Post submission and moderation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use posthub_auth::rbac::require_admin;
use posthub_core::error::AppError;
use posthub_core::types::pagination::{PageRequest, PageResponse};
use posthub_database::repositories::post::PostRepository;
use posthub_entity::post::model::CreatePost;
use posthub_entity::post::{Post, PostStatus};

use crate::context::RequestContext;

/// Handles post submission and the admin moderation queue.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    posts: Arc<PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(posts: Arc<PostRepository>) -> Self {
        Self { posts }
    }

    /// Submits a new post in the pending state.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        title: &str,
        content: &str,
    ) -> Result<Post, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if content.trim().is_empty() {
            return Err(AppError::validation("Content is required"));
        }

        let post = self
            .posts
            .create(&CreatePost {
                account_id: ctx.account_id,
                title: title.to_string(),
                content: content.to_string(),
            })
            .await?;

        info!(account_id = %ctx.account_id, post_id = %post.id, "Post submitted");

        Ok(post)
    }

    /// Lists the caller's own posts, optionally filtered by status.
    pub async fn list_own(
        &self,
        ctx: &RequestContext,
        status: Option<PostStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Post>, AppError> {
        self.posts
            .find_by_account(ctx.account_id, status, &page)
            .await
    }

    /// Lists all posts (the moderation queue), optionally filtered by status.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        status: Option<PostStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Post>, AppError> {
        require_admin(ctx.role)?;
        self.posts.find_all(status, &page).await
    }

    /// Approves a post, clearing any previous rejection reason.
    pub async fn approve(&self, ctx: &RequestContext, post_id: Uuid) -> Result<Post, AppError> {
        require_admin(ctx.role)?;

        let post = self.posts.approve(post_id).await?;

        info!(admin_id = %ctx.account_id, post_id = %post_id, "Post approved");

        Ok(post)
    }

    /// Rejects a post with a mandatory reason.
    pub async fn reject(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        reason: &str,
    ) -> Result<Post, AppError> {
        require_admin(ctx.role)?;

        if reason.trim().is_empty() {
            return Err(AppError::validation("Reason is required"));
        }

        let post = self.posts.reject(post_id, reason).await?;

        info!(admin_id = %ctx.account_id, post_id = %post_id, "Post rejected");

        Ok(post)
    }
}
