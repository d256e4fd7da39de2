//! The token gateway: verifies, rotates, and invalidates bearer tokens
//! bound to a session.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;

use posthub_core::error::AppError;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};

use super::store::SessionStore;
use super::INACTIVITY_LIMIT_MINUTES;

/// Result of a successful gateway pass.
#[derive(Debug, Clone)]
pub struct GatewayPass {
    /// Verified claims of the presented token.
    pub claims: Claims,
    /// Replacement token with the same claims and a fresh expiry. The HTTP
    /// layer attaches it to the response; clients must persist it.
    pub rotated_token: String,
}

/// Request-time gate in front of every authenticated operation.
///
/// Token lifetime (fixed, short) and session lifetime (sliding, tied to
/// real activity) are deliberately decoupled: the session's inactivity
/// window is the authority, not the token's absolute expiry. Issuing a
/// replacement token on every pass rotates credentials transparently
/// without a separate refresh endpoint.
#[derive(Debug, Clone)]
pub struct TokenGateway {
    /// Token issuance.
    encoder: Arc<JwtEncoder>,
    /// Token verification.
    decoder: Arc<JwtDecoder>,
    /// Session persistence.
    sessions: Arc<SessionStore>,
}

impl TokenGateway {
    /// Creates a new token gateway.
    pub fn new(
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            sessions,
        }
    }

    /// Verifies a bearer token and its session, slides the inactivity
    /// window forward, and mints the rotated replacement token.
    ///
    /// Fails with an authentication error when the token fails signature
    /// verification or is expired, when the referenced session does not
    /// exist or is no longer valid, or when the session has been idle
    /// longer than the inactivity limit.
    ///
    /// There is no transaction around the read-check-touch sequence: two
    /// concurrent requests with the same token may both pass the staleness
    /// check and both receive a rotated token. The race is benign —
    /// last-writer-wins on `last_activity`.
    pub async fn authenticate(&self, token: &str) -> Result<GatewayPass, AppError> {
        let claims = self.decoder.decode(token)?;

        let session = self
            .sessions
            .find_by_id(claims.session_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Unknown session"))?;

        if !session.is_valid {
            return Err(AppError::unauthenticated("Session is no longer valid"));
        }

        let now = Utc::now();
        if session.is_stale(now, Duration::minutes(INACTIVITY_LIMIT_MINUTES)) {
            debug!(
                session_id = %session.id,
                last_activity = %session.last_activity,
                "Rejecting stale session"
            );
            return Err(AppError::unauthenticated("Session expired due to inactivity"));
        }

        self.sessions.touch(session.id).await?;

        let rotated_token = self.encoder.reissue(&claims)?;

        Ok(GatewayPass {
            claims,
            rotated_token,
        })
    }
}
