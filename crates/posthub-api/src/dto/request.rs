//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use posthub_entity::account::AccountRole;
use posthub_entity::post::PostStatus;

use crate::extractors::pagination::{default_limit, default_page};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Candidate password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Set-password request body, covering both entry points.
///
/// The self-service path sends `password` with a bearer header; the
/// invitation path sends `email` + `newPassword` unauthenticated. The
/// handler dispatches on the Authorization header, never on body shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    /// New password (self-service path).
    pub password: Option<String>,
    /// Account email (invitation path).
    pub email: Option<String>,
    /// New password (invitation path).
    pub new_password: Option<String>,
}

/// Create account request (admin provisioning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    /// Email to invite.
    pub email: Option<String>,
    /// Role assignment; defaults to USER.
    pub role: Option<AccountRole>,
}

/// Create post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Post body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Reject post request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectPostRequest {
    /// Mandatory rejection reason.
    pub reason: Option<String>,
}

/// Query parameters for post listings: pagination plus an optional
/// status filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListQuery {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Optional status filter.
    pub status: Option<PostStatus>,
}
