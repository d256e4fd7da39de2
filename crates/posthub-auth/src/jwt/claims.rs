//! JWT claims structure embedded in every bearer token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use posthub_entity::account::AccountRole;

/// Claims payload of a bearer token.
///
/// Wire field names match the client contract: `userId`, `email`, `role`,
/// `sessionId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated account's ID.
    #[serde(rename = "userId")]
    pub account_id: Uuid,
    /// The account email.
    pub email: String,
    /// Role at the time of issuance.
    pub role: AccountRole,
    /// Session this token is bound to.
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_math() {
        let now = Utc::now().timestamp();
        let live = Claims {
            account_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: AccountRole::User,
            session_id: Uuid::new_v4(),
            iat: now,
            exp: now + 600,
        };
        assert!(!live.is_expired());

        let dead = Claims { exp: now - 1, ..live };
        assert!(dead.is_expired());
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims {
            account_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: AccountRole::Admin,
            session_id: Uuid::new_v4(),
            iat: 0,
            exp: 0,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("sessionId").is_some());
        assert_eq!(json.get("role").unwrap(), "ADMIN");
    }
}
