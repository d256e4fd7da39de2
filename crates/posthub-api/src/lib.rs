//! # posthub-api
//!
//! HTTP API layer for Posthub, built on Axum. Routes, middleware,
//! extractors, DTOs, and the `AppError` → HTTP response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
