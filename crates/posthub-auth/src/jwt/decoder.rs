//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use posthub_core::config::auth::AuthConfig;
use posthub_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a bearer token string.
    ///
    /// Every failure mode maps to an authentication error; the HTTP layer
    /// answers 401 without body detail.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    _ => AppError::unauthenticated(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use chrono::Utc;
    use posthub_core::config::auth::AuthConfig;
    use posthub_core::error::ErrorKind;
    use posthub_entity::account::AccountRole;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            password_min_length: 8,
        }
    }

    #[test]
    fn test_issued_token_decodes_with_same_claims() {
        let cfg = config("test-secret");
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let account_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();
        let token = encoder
            .issue(account_id, "user@example.com", AccountRole::User, session_id)
            .unwrap();

        let claims = decoder.decode(&token).unwrap();
        assert_eq!(claims.account_id, account_id);
        assert_eq!(claims.session_id, session_id);
        assert_eq!(claims.role, AccountRole::User);
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let encoder = JwtEncoder::new(&config("secret-a"));
        let decoder = JwtDecoder::new(&config("secret-b"));

        let token = encoder
            .issue(
                Uuid::new_v4(),
                "user@example.com",
                AccountRole::User,
                Uuid::new_v4(),
            )
            .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_expired_token_rejected() {
        let cfg = config("test-secret");
        let decoder = JwtDecoder::new(&cfg);

        let now = Utc::now().timestamp();
        let claims = crate::jwt::Claims {
            account_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: AccountRole::User,
            session_id: Uuid::new_v4(),
            iat: now - 700,
            exp: now - 60,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert!(err.message.contains("expired"));
    }
}
