//! Admin account management — provisioning by invitation, listing,
//! deactivation.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use posthub_auth::rbac::require_admin;
use posthub_core::error::AppError;
use posthub_core::types::pagination::{PageRequest, PageResponse};
use posthub_database::repositories::account::AccountRepository;
use posthub_entity::account::model::CreateAccount;
use posthub_entity::account::{Account, AccountRole};
use posthub_mailer::MailSender;

use crate::context::RequestContext;

/// Handles administrative account management operations.
#[derive(Clone)]
pub struct AdminAccountService {
    /// Account repository.
    accounts: Arc<AccountRepository>,
    /// Mail collaborator for invitations.
    mailer: Arc<dyn MailSender>,
}

impl AdminAccountService {
    /// Creates a new admin account service.
    pub fn new(accounts: Arc<AccountRepository>, mailer: Arc<dyn MailSender>) -> Self {
        Self { accounts, mailer }
    }

    /// Provisions a new account with no credential and sends the
    /// invitation mail.
    ///
    /// Delivery failure here is fatal to the request: the account would be
    /// unreachable if the invited user never learns it exists, and the
    /// administrator must know the invitation did not go out.
    pub async fn create_account(
        &self,
        ctx: &RequestContext,
        email: &str,
        role: AccountRole,
    ) -> Result<Account, AppError> {
        require_admin(ctx.role)?;

        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let account = self
            .accounts
            .create(&CreateAccount {
                email: email.to_string(),
                password_hash: None,
                role,
            })
            .await?;

        if let Err(e) = self.mailer.send_welcome(&account.email).await {
            error!(
                account_id = %account.id,
                error = %e,
                "Failed to send welcome email"
            );
            return Err(AppError::external_service("Failed to send welcome email"));
        }

        info!(
            admin_id = %ctx.account_id,
            new_account_id = %account.id,
            role = %account.role,
            "Account provisioned by admin"
        );

        Ok(account)
    }

    /// Lists all accounts with pagination.
    pub async fn list_accounts(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Account>, AppError> {
        require_admin(ctx.role)?;
        self.accounts.find_all(&page).await
    }

    /// Deactivates an account (soft delete — the record is kept).
    pub async fn deactivate_account(
        &self,
        ctx: &RequestContext,
        account_id: Uuid,
    ) -> Result<Account, AppError> {
        require_admin(ctx.role)?;

        let account = self.accounts.deactivate(account_id).await?;

        info!(
            admin_id = %ctx.account_id,
            target_id = %account_id,
            "Account deactivated"
        );

        Ok(account)
    }
}
