//! Login and credential-setup flows.

pub mod service;

pub use service::{AuthService, LoginOutcome};
