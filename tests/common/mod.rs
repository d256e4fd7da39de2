//! Shared test helpers for integration tests.
//!
//! Tests run against a real PostgreSQL instance named by
//! `POSTHUB_TEST_DATABASE_URL` (or `DATABASE_URL`). When neither is set
//! every test returns early, so the suite stays green on machines without
//! a database.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use posthub_api::router::build_router;
use posthub_api::state::AppState;
use posthub_auth::jwt::{JwtDecoder, JwtEncoder};
use posthub_auth::password::{PasswordHasher, PasswordValidator};
use posthub_auth::session::{SessionStore, TokenGateway};
use posthub_core::config::auth::AuthConfig;
use posthub_core::config::{AppConfig, DatabaseConfig};
use posthub_core::error::AppError;
use posthub_core::result::AppResult;
use posthub_database::repositories::{AccountRepository, PostRepository, SessionRepository};
use posthub_mailer::MailSender;
use posthub_service::account::AdminAccountService;
use posthub_service::auth::AuthService;
use posthub_service::post::PostService;

/// Signing secret shared by every test app instance.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Mail double that accepts everything.
pub struct NullMailer;

#[async_trait]
impl MailSender for NullMailer {
    async fn send_welcome(&self, _to: &str) -> AppResult<()> {
        Ok(())
    }

    async fn send_password_set_confirmation(&self, _to: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Mail double that refuses everything, for exercising delivery-failure
/// semantics.
pub struct FailingMailer;

#[async_trait]
impl MailSender for FailingMailer {
    async fn send_welcome(&self, _to: &str) -> AppResult<()> {
        Err(AppError::external_service("SMTP relay unreachable"))
    }

    async fn send_password_set_confirmation(&self, _to: &str) -> AppResult<()> {
        Err(AppError::external_service("SMTP relay unreachable"))
    }
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
    /// Session store, for exercising the invalidation extension point.
    pub session_store: Arc<SessionStore>,
}

impl TestApp {
    /// Create a test application with a mailer that accepts everything.
    /// Returns `None` (skipping the test) when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        Self::with_mailer(Arc::new(NullMailer)).await
    }

    /// Create a test application with the given mail double.
    pub async fn with_mailer(mailer: Arc<dyn MailSender>) -> Option<Self> {
        let url = std::env::var("POSTHUB_TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
            },
            auth: AuthConfig {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                password_min_length: 8,
            },
            mail: Default::default(),
            logging: Default::default(),
        };

        let database = posthub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        posthub_database::migration::run_migrations(database.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = database.pool().clone();

        let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let session_store = Arc::new(SessionStore::new(Arc::clone(&session_repo)));
        let token_gateway = Arc::new(TokenGateway::new(
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
            Arc::clone(&session_store),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&account_repo),
            Arc::clone(&session_store),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&mailer),
        ));
        let admin_account_service = Arc::new(AdminAccountService::new(
            Arc::clone(&account_repo),
            Arc::clone(&mailer),
        ));
        let post_service = Arc::new(PostService::new(Arc::clone(&post_repo)));

        let app_state = AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            token_gateway,
            auth_service,
            admin_account_service,
            post_service,
        };

        let router = build_router(app_state);

        Some(Self {
            router,
            db_pool,
            session_store,
        })
    }

    /// Generate a unique email so parallel tests never collide.
    pub fn unique_email(prefix: &str) -> String {
        format!("{}-{}@test.example", prefix, Uuid::new_v4().simple())
    }

    /// Insert an account directly. `password: None` leaves the credential
    /// unset (invitation state).
    pub async fn create_account(
        &self,
        email: &str,
        password: Option<&str>,
        role: &str,
        is_active: bool,
    ) -> Uuid {
        let hash = password.map(|p| {
            PasswordHasher::new()
                .hash_password(p)
                .expect("Failed to hash password")
        });

        let row: (Uuid,) = sqlx::query_as(
            "INSERT INTO accounts (email, password_hash, password_set, role, is_active) \
             VALUES ($1, $2, $3, $4::account_role, $5) RETURNING id",
        )
        .bind(email)
        .bind(&hash)
        .bind(hash.is_some())
        .bind(role)
        .bind(is_active)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test account");

        row.0
    }

    /// Login and return the issued bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Rewind `last_activity` on all of an account's sessions.
    pub async fn age_sessions(&self, account_id: Uuid, minutes: i64) {
        sqlx::query("UPDATE sessions SET last_activity = $2 WHERE account_id = $1")
            .bind(account_id)
            .bind(Utc::now() - Duration::minutes(minutes))
            .execute(&self.db_pool)
            .await
            .expect("Failed to age sessions");
    }

    /// Fetch the ID of the account's most recent session.
    pub async fn latest_session_id(&self, account_id: Uuid) -> Uuid {
        let row: (Uuid,) = sqlx::query_as(
            "SELECT id FROM sessions WHERE account_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(account_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("No session found");
        row.0
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers, including any rotated token.
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty).
    pub body: Value,
}

impl TestResponse {
    /// The rotated token from the `x-refresh-token` header, if present.
    pub fn refresh_token(&self) -> Option<String> {
        self.headers
            .get("x-refresh-token")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }
}
