//! Mail transport configuration.

use serde::{Deserialize, Serialize};

/// SMTP mail transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address, e.g. `Posthub <no-reply@example.com>`.
    #[serde(default = "default_from")]
    pub from: String,
    /// Base URL of the frontend, used to build set-password links.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: default_from(),
            frontend_url: default_frontend_url(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from() -> String {
    "Posthub <no-reply@localhost>".to_string()
}

fn default_frontend_url() -> String {
    "http://localhost:5173".to_string()
}
