//! Account management services.

pub mod admin;

pub use admin::AdminAccountService;
