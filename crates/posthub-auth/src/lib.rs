//! # posthub-auth
//!
//! Authentication building blocks for Posthub.
//!
//! ## Modules
//!
//! - `jwt` — bearer token creation and validation
//! - `password` — Argon2id credential hashing and policy enforcement
//! - `session` — session persistence and the token gateway
//! - `rbac` — role gate for admin-only operations

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{SessionStore, TokenGateway};
