//! OpenAiCompletions -- concrete [`CompletionBackend`] for an OpenAI-style
//! completions endpoint.
//!
//! Sends non-streaming requests to `/v1/completions` with bearer-token
//! authentication. The API key is wrapped in [`secrecy::SecretString`] and
//! is only exposed when constructing request headers.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use chatline_core::llm::CompletionBackend;
use chatline_types::completion::{CompletionError, CompletionRequest, CompletionResponse};

use crate::config::CompletionConfig;

use super::types::{CompletionsApiRequest, CompletionsApiResponse};

/// Completion backend speaking the OpenAI completions wire format.
pub struct OpenAiCompletions {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiCompletions {
    /// Request timeout at the HTTP client level. The relay applies its own
    /// tighter deadline around the whole call.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(config: CompletionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CompletionBackend for OpenAiCompletions {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = CompletionsApiRequest::from(request);

        let response = self
            .client
            .post(self.url("/v1/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Http(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: CompletionsApiResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::Deserialization(err.to_string()))?;

        tracing::debug!(choices = payload.choices.len(), "completion received");
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> OpenAiCompletions {
        OpenAiCompletions::new(CompletionConfig {
            base_url: "https://api.openai.com".to_string(),
            api_key: SecretString::from("sk-test".to_string()),
            model: "gpt-3.5-turbo-instruct".to_string(),
        })
    }

    #[test]
    fn test_url_construction() {
        let backend = backend().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            backend.url("/v1/completions"),
            "http://localhost:8080/v1/completions"
        );
    }

    #[test]
    fn test_model_accessor() {
        assert_eq!(backend().model(), "gpt-3.5-turbo-instruct");
    }
}
