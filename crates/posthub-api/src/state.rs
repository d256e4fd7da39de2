//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use posthub_auth::session::TokenGateway;
use posthub_core::config::AppConfig;
use posthub_service::account::AdminAccountService;
use posthub_service::auth::AuthService;
use posthub_service::post::PostService;

/// Application state containing all shared dependencies.
///
/// Built once in `main` and passed to every Axum handler via
/// `State<AppState>`. All fields are `Arc`-wrapped for cheap cloning
/// across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// The token gateway in front of authenticated routes.
    pub token_gateway: Arc<TokenGateway>,
    /// Login and credential setup.
    pub auth_service: Arc<AuthService>,
    /// Admin account management.
    pub admin_account_service: Arc<AdminAccountService>,
    /// Post submission and moderation.
    pub post_service: Arc<PostService>,
}
