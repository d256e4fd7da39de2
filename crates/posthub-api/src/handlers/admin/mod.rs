//! Admin-only handlers.

pub mod accounts;
pub mod posts;
