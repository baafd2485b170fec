//! Message delivery abstraction.
//!
//! The seam between the relay core and the messaging gateway's send-text
//! endpoint. The concrete HTTP client lives in chatline-infra.

use chatline_types::chat::ConversationId;
use chatline_types::error::DeliveryError;

/// Trait for delivering outbound messages to a conversation.
///
/// Delivery is fire-and-forget from the relay's perspective: errors are
/// logged by the caller and never retried or escalated.
pub trait MessageDelivery: Send + Sync {
    /// Send `message` to the conversation identified by `to`.
    fn send(
        &self,
        to: &ConversationId,
        message: &str,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}
