//! Shared-secret authentication extractor.
//!
//! The messaging gateway signs every webhook call with a `client-token`
//! header. Extracting [`Authenticated`] verifies it against the configured
//! secret before any processing runs; comparison is constant-time.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use secrecy::ExposeSecret;

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated request marker. Extracting this validates the client token.
pub struct Authenticated;

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("client-token")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing client-token header".to_string()))?;

        if constant_time_eq(token.trim(), state.webhook.client_token.expose_secret()) {
            Ok(Authenticated)
        } else {
            Err(AppError::Unauthorized("invalid client token".to_string()))
        }
    }
}

/// Byte-by-byte XOR comparison so token mismatches take uniform time.
fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        return false;
    }
    let mut diff = 0u8;
    for (a, b) in provided.iter().zip(expected.iter()) {
        diff |= a ^ b;
    }
    diff == 0
}
