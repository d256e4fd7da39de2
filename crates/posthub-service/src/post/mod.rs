//! Post submission and moderation services.

pub mod service;

pub use service::PostService;
