//! Session persistence and the token gateway.

pub mod gateway;
pub mod store;

pub use gateway::{GatewayPass, TokenGateway};
pub use store::SessionStore;

/// Fixed inactivity limit in minutes. A session whose last activity is
/// older than this is expired regardless of the token's own lifetime.
pub const INACTIVITY_LIMIT_MINUTES: i64 = 5;
