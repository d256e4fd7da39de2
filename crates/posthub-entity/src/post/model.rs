//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PostStatus;

/// A user-submitted post awaiting or past moderation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// The submitting account.
    pub account_id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Moderation status.
    pub status: PostStatus,
    /// Reason given on rejection; cleared on approval.
    pub rejection_reason: Option<String>,
    /// When the post was submitted.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// The submitting account.
    pub account_id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}
