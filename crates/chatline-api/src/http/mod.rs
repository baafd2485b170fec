//! HTTP layer for the Chatline relay.
//!
//! Axum-based webhook endpoint with shared-secret authentication, plus
//! liveness routes.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
