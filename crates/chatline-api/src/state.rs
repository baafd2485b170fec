//! Application state wiring the relay together.
//!
//! The relay service is generic over its collaborator traits; AppState pins
//! it to the concrete infra implementations and shares it across webhook
//! calls.

use std::sync::Arc;

use chatline_core::chat::service::ChatRelay;
use chatline_core::chat::store::SessionStore;
use chatline_infra::config::{AppConfig, WebhookConfig};
use chatline_infra::gateway::GatewayClient;
use chatline_infra::llm::OpenAiCompletions;

/// Concrete relay type pinned to the infra implementations.
pub type ConcreteChatRelay = ChatRelay<OpenAiCompletions, GatewayClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteChatRelay>,
    pub webhook: Arc<WebhookConfig>,
}

impl AppState {
    /// Wire the relay from configuration: outbound clients, a fresh session
    /// store, and the webhook secret for the auth extractor.
    pub fn init(config: AppConfig) -> Self {
        let AppConfig {
            gateway,
            webhook,
            completion,
        } = config;

        let delivery = GatewayClient::new(gateway);
        let backend = OpenAiCompletions::new(completion);
        let model = backend.model().to_string();
        let relay = ChatRelay::new(SessionStore::new(), backend, delivery, model);

        Self {
            relay: Arc::new(relay),
            webhook: Arc::new(webhook),
        }
    }
}
