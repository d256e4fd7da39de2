//! Response DTOs.

use serde::{Deserialize, Serialize};

use posthub_entity::account::AccountRole;

/// Login response: either an issued token or the setup-required signal.
///
/// The setup-required variant is a 200, not an error — the client
/// redirects to credential setup instead of showing a login failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    /// Credentials verified.
    Success {
        /// Bearer token for subsequent requests.
        token: String,
        /// The account role.
        role: AccountRole,
    },
    /// The account has no credential configured yet.
    #[serde(rename_all = "camelCase")]
    SetupRequired {
        /// Always true.
        requires_password_setup: bool,
    },
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_required_wire_shape() {
        let json = serde_json::to_value(LoginResponse::SetupRequired {
            requires_password_setup: true,
        })
        .unwrap();
        assert_eq!(json.get("requiresPasswordSetup").unwrap(), true);
        assert!(json.get("token").is_none());
    }
}
