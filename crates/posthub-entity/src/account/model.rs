//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A user or administrator identity record.
///
/// Accounts provisioned by an admin start with no credential
/// (`password_hash` null, `password_set` false) until the invited user
/// completes first-time setup. Deactivation is a soft delete; accounts
/// are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login email.
    pub email: String,
    /// Argon2id credential hash; null until first set.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Whether a credential has been configured.
    pub password_set: bool,
    /// Account role.
    pub role: AccountRole,
    /// Active flag; false means deactivated (soft delete).
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Login email (unique).
    pub email: String,
    /// Pre-hashed credential, if set at creation (seed path only).
    pub password_hash: Option<String>,
    /// Assigned role.
    pub role: AccountRole,
}
