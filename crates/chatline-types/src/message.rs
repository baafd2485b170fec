//! Inbound message event consumed by the relay.

use serde::{Deserialize, Serialize};

use crate::chat::ConversationId;

/// One inbound chat event, normalized away from the gateway wire format.
///
/// The HTTP layer converts the gateway's webhook payload into this shape
/// before handing it to the relay. `is_echo` marks messages the bot's own
/// channel sent; those are ignored entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub identity: ConversationId,
    pub text: String,
    pub is_echo: bool,
}

impl InboundMessage {
    pub fn new(identity: impl Into<ConversationId>, text: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            text: text.into(),
            is_echo: false,
        }
    }

    /// Mark this message as an echo of the bot's own output.
    pub fn echo(mut self) -> Self {
        self.is_echo = true;
        self
    }
}
