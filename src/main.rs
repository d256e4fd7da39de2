//! Posthub server — content moderation over a relational store.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use posthub_api::router::build_router;
use posthub_api::state::AppState;
use posthub_auth::jwt::{JwtDecoder, JwtEncoder};
use posthub_auth::password::{PasswordHasher, PasswordValidator};
use posthub_auth::session::{SessionStore, TokenGateway};
use posthub_core::config::AppConfig;
use posthub_core::error::AppError;
use posthub_database::repositories::{AccountRepository, PostRepository, SessionRepository};
use posthub_database::DatabasePool;
use posthub_mailer::{MailSender, Mailer};
use posthub_service::account::AdminAccountService;
use posthub_service::auth::AuthService;
use posthub_service::post::PostService;

#[tokio::main]
async fn main() {
    let env = std::env::var("POSTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Posthub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let database = DatabasePool::connect(&config.database).await?;
    posthub_database::migration::run_migrations(database.pool()).await?;

    let db_pool = database.pool().clone();

    // ── Step 2: Repositories ─────────────────────────────────────
    let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepository::new(db_pool.clone()));

    // ── Step 3: Auth system ──────────────────────────────────────
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

    // ── Step 4: Mail collaborator ────────────────────────────────
    let mailer: Arc<dyn MailSender> = Arc::new(Mailer::new(&config.mail)?);

    // ── Step 5: Services ─────────────────────────────────────────
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

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        token_gateway,
        auth_service,
        admin_account_service,
        post_service,
    };

    let app = build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Posthub server listening on {addr}");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    database.close().await;
    tracing::info!("Posthub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
