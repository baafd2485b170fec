//! Error types for the outbound delivery collaborator.

use thiserror::Error;

/// Errors from the messaging-gateway delivery client.
///
/// Delivery is fire-and-forget from the relay's perspective: these errors
/// are logged by the caller, never retried, and never surfaced to the
/// webhook caller.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("http error: {0}")]
    Http(String),

    #[error("gateway returned status {status}: {message}")]
    Api { status: u16, message: String },
}
