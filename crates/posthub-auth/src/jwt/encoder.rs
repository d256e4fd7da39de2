//! JWT token creation with fixed TTL signing.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use posthub_core::config::auth::AuthConfig;
use posthub_core::error::AppError;
use posthub_entity::account::AccountRole;

use super::claims::Claims;
use super::TOKEN_TTL_MINUTES;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issues a bearer token bound to the given account and session.
    pub fn issue(
        &self,
        account_id: Uuid,
        email: &str,
        role: AccountRole,
        session_id: Uuid,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(TOKEN_TTL_MINUTES);

        let claims = Claims {
            account_id,
            email: email.to_string(),
            role,
            session_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Re-issues a token carrying the same identity claims with a fresh
    /// expiry. Used by the gateway for per-request rotation.
    pub fn reissue(&self, claims: &Claims) -> Result<String, AppError> {
        self.issue(
            claims.account_id,
            &claims.email,
            claims.role,
            claims.session_id,
        )
    }
}
