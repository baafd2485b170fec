//! Webhook handler for inbound gateway messages.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use chatline_types::chat::ConversationId;
use chatline_types::message::InboundMessage;

use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// Gateway webhook payload. Only the fields the relay consumes are modeled;
/// the gateway sends more, which serde ignores.
#[derive(Debug, Deserialize)]
pub struct WebhookMessage {
    pub phone: String,
    #[serde(rename = "fromMe", default)]
    pub from_me: bool,
    #[serde(default)]
    pub text: Option<TextPayload>,
}

/// Nested text body in the gateway payload.
#[derive(Debug, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub message: String,
}

/// POST /on-new-message - Receive one inbound message from the gateway.
///
/// Authentication runs first via the [`Authenticated`] extractor. The relay
/// is awaited to its terminal state, and the response is always the fixed
/// acknowledgement: backend failures are answered in the conversation, not
/// on the webhook.
pub async fn on_new_message(
    State(state): State<AppState>,
    _auth: Authenticated,
    Json(payload): Json<WebhookMessage>,
) -> Json<serde_json::Value> {
    let text = payload.text.map(|t| t.message).unwrap_or_default();
    let message = InboundMessage {
        identity: ConversationId::new(payload.phone),
        text,
        is_echo: payload.from_me,
    };

    let outcome = state.relay.handle(&message).await;
    debug!(identity = %message.identity, ?outcome, "webhook processed");

    Json(json!({ "message": "success" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_payload_deserializes() {
        let raw = r#"{"phone":"5511999999999","fromMe":false,"text":{"message":"hello"},"instanceId":"abc"}"#;
        let payload: WebhookMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.phone, "5511999999999");
        assert!(!payload.from_me);
        assert_eq!(payload.text.unwrap().message, "hello");
    }

    #[test]
    fn test_webhook_payload_missing_text_and_from_me() {
        let raw = r#"{"phone":"5511999999999"}"#;
        let payload: WebhookMessage = serde_json::from_str(raw).unwrap();
        assert!(!payload.from_me);
        assert!(payload.text.is_none());
    }
}
