//! Seed binary: creates the bootstrap admin and a demo user account.
//!
//! Idempotent — accounts that already exist are left untouched.

use anyhow::Context;
use sqlx::PgPool;

use posthub_auth::password::PasswordHasher;
use posthub_core::config::AppConfig;
use posthub_database::DatabasePool;

const SEED_PASSWORD: &str = "password123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let env = std::env::var("POSTHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env).context("Failed to load configuration")?;

    let database = DatabasePool::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    posthub_database::migration::run_migrations(database.pool())
        .await
        .context("Failed to run migrations")?;

    let hasher = PasswordHasher::new();

    seed_account(database.pool(), &hasher, "admin@example.com", "ADMIN").await?;
    seed_account(database.pool(), &hasher, "user@example.com", "USER").await?;

    println!("Seed complete. Both accounts use password: {SEED_PASSWORD}");

    database.close().await;
    Ok(())
}

async fn seed_account(
    pool: &PgPool,
    hasher: &PasswordHasher,
    email: &str,
    role: &str,
) -> anyhow::Result<()> {
    let exists: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(pool)
            .await?;

    if exists.is_some() {
        println!("{email} already exists, skipping");
        return Ok(());
    }

    let hash = hasher
        .hash_password(SEED_PASSWORD)
        .map_err(|e| anyhow::anyhow!("Failed to hash seed password: {e}"))?;

    sqlx::query(
        "INSERT INTO accounts (email, password_hash, password_set, role) \
         VALUES ($1, $2, TRUE, $3::account_role)",
    )
    .bind(email)
    .bind(&hash)
    .bind(role)
    .execute(pool)
    .await?;

    println!("Created {role} account {email}");
    Ok(())
}
