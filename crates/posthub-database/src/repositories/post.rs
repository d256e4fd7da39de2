//! Post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use posthub_core::error::{AppError, ErrorKind};
use posthub_core::result::AppResult;
use posthub_core::types::pagination::{PageRequest, PageResponse};
use posthub_entity::post::model::CreatePost;
use posthub_entity::post::{Post, PostStatus};

/// Repository for post CRUD and moderation queries.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post in the pending state.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (account_id, title, content) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.account_id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// List one account's posts, optionally filtered by status, newest first.
    pub async fn find_by_account(
        &self,
        account_id: Uuid,
        status: Option<PostStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let (total, posts) = match status {
            Some(status) => {
                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM posts WHERE account_id = $1 AND status = $2",
                )
                .bind(account_id)
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                })?;

                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts WHERE account_id = $1 AND status = $2 \
                     ORDER BY created_at DESC LIMIT $3 OFFSET $4",
                )
                .bind(account_id)
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;

                (total, posts)
            }
            None => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE account_id = $1")
                        .bind(account_id)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                        })?;

                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts WHERE account_id = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(account_id)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;

                (total, posts)
            }
        };

        Ok(PageResponse::new(posts, page, total as u64))
    }

    /// List all posts (moderation queue), optionally filtered by status.
    pub async fn find_all(
        &self,
        status: Option<PostStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let (total, posts) = match status {
            Some(status) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = $1")
                        .bind(status)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                        })?;

                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;

                (total, posts)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                    })?;

                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;

                (total, posts)
            }
        };

        Ok(PageResponse::new(posts, page, total as u64))
    }

    /// Mark a post approved, clearing any previous rejection reason.
    pub async fn approve(&self, post_id: Uuid) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET status = 'APPROVED', rejection_reason = NULL, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to approve post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))
    }

    /// Mark a post rejected with the given reason.
    pub async fn reject(&self, post_id: Uuid, reason: &str) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET status = 'REJECTED', rejection_reason = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(post_id)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reject post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))
    }
}
