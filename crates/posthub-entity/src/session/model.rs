//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Server-side record tracking one authenticated login's activity window.
///
/// A session is usable only while `is_valid` is true AND the elapsed time
/// since `last_activity` stays below the inactivity limit. Every request
/// passing the token gateway refreshes `last_activity`, sliding the window
/// forward; staleness is the expiry mechanism.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The account this session belongs to.
    pub account_id: Uuid,
    /// Last activity timestamp, refreshed on every authenticated request.
    pub last_activity: DateTime<Utc>,
    /// Validity flag; cleared by explicit invalidation.
    pub is_valid: bool,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has been idle longer than the given limit.
    pub fn is_stale(&self, now: DateTime<Utc>, inactivity_limit: Duration) -> bool {
        now - self.last_activity > inactivity_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(last_activity: DateTime<Utc>) -> Session {
        Session {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            last_activity,
            is_valid: true,
            created_at: last_activity,
        }
    }

    #[test]
    fn test_staleness_boundary() {
        let now = Utc::now();
        let limit = Duration::minutes(5);

        assert!(!session(now - Duration::minutes(4)).is_stale(now, limit));
        assert!(session(now - Duration::minutes(6)).is_stale(now, limit));
        // Exactly at the limit is still inside the window.
        assert!(!session(now - Duration::minutes(5)).is_stale(now, limit));
    }
}
