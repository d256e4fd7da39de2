//! # posthub-mailer
//!
//! SMTP delivery for the two account-lifecycle messages: the welcome
//! invitation sent when an admin provisions an account, and the
//! confirmation sent after first-time credential setup.
//!
//! Failure semantics are owned by the callers: provisioning treats a send
//! failure as fatal, credential-setup confirmation logs and moves on.

mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use posthub_core::config::mail::MailConfig;
use posthub_core::error::AppError;
use posthub_core::result::AppResult;

/// The mail collaborator seam. Services depend on this trait so tests can
/// substitute a double without a live SMTP relay.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Sends the invitation mail pointing a freshly provisioned account at
    /// the credential-setup page.
    async fn send_welcome(&self, to: &str) -> AppResult<()>;

    /// Sends the confirmation mail after a credential has been set.
    async fn send_password_set_confirmation(&self, to: &str) -> AppResult<()>;
}

/// SMTP implementation of [`MailSender`] backed by lettre.
///
/// The transport is built once at process start and injected wherever a
/// message needs to go out; it holds its own connection pool internally.
#[derive(Debug, Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    frontend_url: String,
}

impl Mailer {
    /// Builds the mailer from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| {
                AppError::configuration(format!("Invalid SMTP relay configuration: {e}"))
            })?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        let from = config
            .from
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid sender address: {e}")))?;

        Ok(Self {
            transport,
            from,
            frontend_url: config.frontend_url.clone(),
        })
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> AppResult<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| AppError::internal(format!("Failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::external_service(format!("Mail delivery failed: {e}")))?;

        info!(to = %to, subject = %subject, "Mail sent");
        Ok(())
    }
}

#[async_trait]
impl MailSender for Mailer {
    async fn send_welcome(&self, to: &str) -> AppResult<()> {
        let set_password_url = format!("{}/set-password?email={}", self.frontend_url, to);
        self.send(
            to,
            "Welcome! Set Your Password",
            templates::welcome_body(to, &set_password_url),
        )
        .await
    }

    async fn send_password_set_confirmation(&self, to: &str) -> AppResult<()> {
        let login_url = format!("{}/login", self.frontend_url);
        self.send(
            to,
            "Password Set Successfully",
            templates::password_set_body(&login_url),
        )
        .await
    }
}
