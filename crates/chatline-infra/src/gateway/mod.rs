//! Messaging-gateway delivery client.

mod client;

pub use client::GatewayClient;
