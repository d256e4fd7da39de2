//! # posthub-service
//!
//! Business logic services for Posthub. Each service orchestrates
//! repositories, the auth building blocks, and the mail collaborator;
//! HTTP concerns stay in `posthub-api`.

pub mod account;
pub mod auth;
pub mod context;
pub mod post;

pub use context::RequestContext;
