//! Completions API wire types.
//!
//! These are the HTTP request/response structures for the `/v1/completions`
//! endpoint. They are NOT the generic completion types from chatline-types --
//! those are backend-agnostic; these match the wire format exactly.

use serde::{Deserialize, Serialize};

use chatline_types::completion::{CompletionChoice, CompletionRequest, CompletionResponse};

/// Request body for the completions endpoint.
#[derive(Debug, Serialize)]
pub(super) struct CompletionsApiRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub stop: &'a [String],
}

impl<'a> From<&'a CompletionRequest> for CompletionsApiRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            prompt: &request.prompt,
            temperature: request.temperature,
            top_p: request.top_p,
            max_tokens: request.max_tokens,
            frequency_penalty: request.frequency_penalty,
            presence_penalty: request.presence_penalty,
            stop: &request.stop,
        }
    }
}

/// Response body from the completions endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct CompletionsApiResponse {
    #[serde(default)]
    pub choices: Vec<CompletionsApiChoice>,
}

/// One candidate in the response.
#[derive(Debug, Deserialize)]
pub(super) struct CompletionsApiChoice {
    pub text: String,
}

impl From<CompletionsApiResponse> for CompletionResponse {
    fn from(payload: CompletionsApiResponse) -> Self {
        Self {
            choices: payload
                .choices
                .into_iter()
                .map(|choice| CompletionChoice { text: choice.text })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-3.5-turbo-instruct".to_string(),
            prompt: "5511999999999: hello\nASSISTANT:".to_string(),
            temperature: 0.9,
            top_p: 1.0,
            max_tokens: 500,
            frequency_penalty: 0.0,
            presence_penalty: 0.6,
            stop: vec!["5511999999999:".to_string(), "ASSISTANT:".to_string()],
        }
    }

    #[test]
    fn test_request_wire_fields() {
        let generic = request();
        let wire = CompletionsApiRequest::from(&generic);
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(
            json["stop"],
            serde_json::json!(["5511999999999:", "ASSISTANT:"])
        );
    }

    #[test]
    fn test_response_deserializes_choices() {
        let raw = r#"{"id":"cmpl-1","object":"text_completion","choices":[{"text":"\n\nhi there","index":0,"finish_reason":"stop"}]}"#;
        let payload: CompletionsApiResponse = serde_json::from_str(raw).unwrap();
        let response: CompletionResponse = payload.into();
        assert_eq!(response.first_text(), Some("\n\nhi there"));
    }

    #[test]
    fn test_response_missing_choices_is_empty() {
        let raw = r#"{"id":"cmpl-1","object":"text_completion"}"#;
        let payload: CompletionsApiResponse = serde_json::from_str(raw).unwrap();
        let response: CompletionResponse = payload.into();
        assert!(response.choices.is_empty());
    }
}
