//! Request context carrying the authenticated principal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use posthub_entity::account::AccountRole;

/// Context for the current authenticated request.
///
/// Built by the auth middleware from verified token claims and passed into
/// service methods so that every operation knows *who* is acting and from
/// *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The role at the time the token was issued.
    pub role: AccountRole,
    /// The account email (convenience field from the claims).
    pub email: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, session_id: Uuid, role: AccountRole, email: String) -> Self {
        Self {
            account_id,
            session_id,
            role,
            email,
        }
    }

    /// Returns whether the current account is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
