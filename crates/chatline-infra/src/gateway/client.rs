//! GatewayClient -- concrete [`MessageDelivery`] for the messaging gateway's
//! send-text endpoint.
//!
//! The gateway addresses an account by instance id and instance token, both
//! embedded in the URL path. Outbound messages carry a typing-indicator
//! delay so replies look composed rather than instantaneous.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use chatline_core::gateway::MessageDelivery;
use chatline_types::chat::ConversationId;
use chatline_types::error::DeliveryError;

use crate::config::GatewayConfig;

/// HTTP client for the gateway send-text endpoint.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    instance_id: String,
    instance_token: SecretString,
    typing_delay_secs: u32,
}

/// Request body for send-text. Field names follow the gateway wire format.
#[derive(Debug, Serialize)]
struct SendTextRequest<'a> {
    phone: &'a str,
    message: &'a str,
    #[serde(rename = "delayTyping")]
    delay_typing: u32,
}

impl GatewayClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url,
            instance_id: config.instance_id,
            instance_token: config.instance_token,
            typing_delay_secs: config.typing_delay_secs,
        }
    }

    fn send_text_url(&self) -> String {
        format!(
            "{}/instances/{}/token/{}/send-text",
            self.base_url,
            self.instance_id,
            self.instance_token.expose_secret()
        )
    }
}

impl MessageDelivery for GatewayClient {
    async fn send(&self, to: &ConversationId, message: &str) -> Result<(), DeliveryError> {
        let body = SendTextRequest {
            phone: to.as_str(),
            message,
            delay_typing: self.typing_delay_secs,
        };

        let response = self
            .client
            .post(self.send_text_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| DeliveryError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(identity = %to, "message delivered via gateway");
        Ok(())
    }
}
