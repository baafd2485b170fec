//! Provider-agnostic completion request/response types.
//!
//! These are the generic shapes the relay core works with. Wire formats for
//! a concrete backend (field names, endpoint paths) live in chatline-infra,
//! not here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single text-completion request.
///
/// The sampling parameters are chosen by the relay; the prompt is the
/// rendered transcript window. `stop` bounds generation to a single
/// assistant turn by naming the role-tag prefixes of both speakers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub stop: Vec<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

/// Response from the completion backend.
///
/// An empty `choices` list is a defined failure condition for callers,
/// not a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// The first candidate's text, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

/// Errors from the completion backend.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("http error: {0}")]
    Http(String),

    #[error("backend returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_empty() {
        let resp = CompletionResponse::default();
        assert!(resp.first_text().is_none());
    }

    #[test]
    fn test_first_text_takes_first_choice() {
        let resp = CompletionResponse {
            choices: vec![
                CompletionChoice {
                    text: " hi there".to_string(),
                },
                CompletionChoice {
                    text: "ignored".to_string(),
                },
            ],
        };
        assert_eq!(resp.first_text(), Some(" hi there"));
    }

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_request_serializes_stop_list() {
        let req = CompletionRequest {
            model: "gpt-3.5-turbo-instruct".to_string(),
            prompt: "5511999999999: hello\nASSISTANT:".to_string(),
            temperature: 0.9,
            top_p: 1.0,
            max_tokens: 500,
            frequency_penalty: 0.0,
            presence_penalty: 0.6,
            stop: vec!["5511999999999:".to_string(), "ASSISTANT:".to_string()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["stop"].as_array().unwrap().len(), 2);
        assert_eq!(json["max_tokens"], 500);
    }
}
