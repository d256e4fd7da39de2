//! Login flow and the two credential-setup operations.

use std::sync::Arc;

use tracing::{info, warn};

use posthub_auth::jwt::JwtEncoder;
use posthub_auth::password::{PasswordHasher, PasswordValidator};
use posthub_auth::session::SessionStore;
use posthub_core::error::AppError;
use posthub_database::repositories::account::AccountRepository;
use posthub_entity::account::AccountRole;
use posthub_mailer::MailSender;

use crate::context::RequestContext;

/// Result of a login attempt that did not fail outright.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials verified; a session was created and a token issued.
    Success {
        /// Bearer token bound to the new session.
        token: String,
        /// The account's role, echoed so the client can route.
        role: AccountRole,
    },
    /// The account exists but has no credential configured yet. The client
    /// should redirect to credential setup instead of showing a failure.
    SetupRequired,
}

/// Handles login and credential setup.
#[derive(Clone)]
pub struct AuthService {
    /// Account repository.
    accounts: Arc<AccountRepository>,
    /// Session persistence.
    sessions: Arc<SessionStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuance.
    encoder: Arc<JwtEncoder>,
    /// Mail collaborator for setup confirmations.
    mailer: Arc<dyn MailSender>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        accounts: Arc<AccountRepository>,
        sessions: Arc<SessionStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            accounts,
            sessions,
            hasher,
            validator,
            encoder,
            mailer,
        }
    }

    /// Performs the login flow.
    ///
    /// Deactivated accounts are treated identically to unknown emails so a
    /// failed attempt leaks nothing about account existence or status.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .filter(|a| a.is_active)
            .ok_or_else(|| AppError::unauthenticated("Invalid credentials"))?;

        if !account.password_set {
            return Ok(LoginOutcome::SetupRequired);
        }

        let hash = account
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::internal("Account marked configured but has no hash"))?;

        if !self.hasher.verify_password(password, hash)? {
            return Err(AppError::unauthenticated("Invalid credentials"));
        }

        let session = self.sessions.create(account.id).await?;
        let token = self
            .encoder
            .issue(account.id, &account.email, account.role, session.id)?;

        info!(
            account_id = %account.id,
            session_id = %session.id,
            "Login successful"
        );

        Ok(LoginOutcome::Success {
            token,
            role: account.role,
        })
    }

    /// Sets the credential for the currently authenticated principal
    /// (self-service path).
    pub async fn set_own_credential(
        &self,
        ctx: &RequestContext,
        password: &str,
    ) -> Result<(), AppError> {
        let hash = self.hasher.hash_password(password)?;
        self.accounts.set_credential(ctx.account_id, &hash).await?;

        info!(account_id = %ctx.account_id, "Credential set by owner");
        Ok(())
    }

    /// Sets the credential for an account identified by email (invitation
    /// path). Rejects when a credential is already configured so this path
    /// can never silently overwrite one.
    ///
    /// The confirmation mail is best-effort: delivery failure is logged,
    /// never surfaced — the account is usable either way.
    pub async fn set_credential_by_email(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        self.validator.validate(new_password)?;

        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if account.password_hash.is_some() {
            return Err(AppError::validation(
                "Password already set. Please use login or reset password.",
            ));
        }

        let hash = self.hasher.hash_password(new_password)?;
        self.accounts.set_credential(account.id, &hash).await?;

        info!(account_id = %account.id, "Credential set via invitation");

        if let Err(e) = self.mailer.send_password_set_confirmation(&account.email).await {
            warn!(
                account_id = %account.id,
                error = %e,
                "Failed to send password-set confirmation"
            );
        }

        Ok(())
    }
}
