//! Bearer token creation and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

/// Fixed bearer token lifetime in minutes, independent of session staleness.
pub const TOKEN_TTL_MINUTES: i64 = 10;
