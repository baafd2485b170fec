//! Application configuration, loaded from environment variables.
//!
//! The relay is configured entirely through the environment: gateway
//! instance coordinates, the webhook shared secret, and the completion
//! backend credentials. Secrets are wrapped in [`secrecy::SecretString`]
//! and never appear in Debug output or logs.

use secrecy::SecretString;
use thiserror::Error;

/// Default messaging-gateway API base.
const DEFAULT_GATEWAY_URL: &str = "https://api.z-api.io";

/// Default completion backend base.
const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com";

/// Default completion model.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Default typing-indicator delay forwarded with every outbound message.
const DEFAULT_TYPING_DELAY_SECS: u32 = 3;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: String, message: String },
}

/// Messaging-gateway client configuration.
#[derive(Debug)]
pub struct GatewayConfig {
    pub base_url: String,
    pub instance_id: String,
    pub instance_token: SecretString,
    pub typing_delay_secs: u32,
}

/// Webhook-side configuration: the shared secret inbound requests must
/// present in the `client-token` header.
#[derive(Debug)]
pub struct WebhookConfig {
    pub client_token: SecretString,
}

/// Completion backend configuration.
#[derive(Debug)]
pub struct CompletionConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub model: String,
}

/// Full application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub webhook: WebhookConfig,
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Required: `CHATLINE_GATEWAY_INSTANCE_ID`,
    /// `CHATLINE_GATEWAY_INSTANCE_TOKEN`, `CHATLINE_GATEWAY_CLIENT_TOKEN`,
    /// `OPENAI_API_KEY`. Everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            get(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
        };
        let with_default = |name: &str, default: &str| {
            get(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let typing_delay_secs = match get("CHATLINE_TYPING_DELAY_SECS") {
            None => DEFAULT_TYPING_DELAY_SECS,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "CHATLINE_TYPING_DELAY_SECS".to_string(),
                message: format!("expected a non-negative integer, got '{raw}'"),
            })?,
        };

        Ok(Self {
            gateway: GatewayConfig {
                base_url: with_default("CHATLINE_GATEWAY_URL", DEFAULT_GATEWAY_URL),
                instance_id: required("CHATLINE_GATEWAY_INSTANCE_ID")?,
                instance_token: SecretString::from(required("CHATLINE_GATEWAY_INSTANCE_TOKEN")?),
                typing_delay_secs,
            },
            webhook: WebhookConfig {
                client_token: SecretString::from(required("CHATLINE_GATEWAY_CLIENT_TOKEN")?),
            },
            completion: CompletionConfig {
                base_url: with_default("CHATLINE_COMPLETION_URL", DEFAULT_COMPLETION_URL),
                api_key: SecretString::from(required("OPENAI_API_KEY")?),
                model: with_default("CHATLINE_COMPLETION_MODEL", DEFAULT_MODEL),
            },
        })
    }
}
