//! Infrastructure implementations for Chatline.
//!
//! Environment-based configuration, the completion backend HTTP client,
//! and the messaging-gateway delivery client. The traits these clients
//! implement live in chatline-core.

pub mod config;
pub mod gateway;
pub mod llm;
