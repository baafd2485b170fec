//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application-level error that maps to HTTP responses.
///
/// The webhook's only hard failures are transport-level: a missing or wrong
/// shared secret (401) and a malformed body (400, produced by the Json
/// extractor's own rejection). Backend failures are conversational and never
/// reach this type.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure.
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
