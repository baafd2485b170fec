//! Shared domain types for Chatline.
//!
//! This crate contains the types used across the Chatline relay:
//! conversation identities, inbound messages, and the provider-agnostic
//! completion request/response shapes with their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod completion;
pub mod error;
pub mod message;
