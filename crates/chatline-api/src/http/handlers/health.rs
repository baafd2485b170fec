//! Liveness routes.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET / - Plain banner confirming the relay is up.
pub async fn index() -> &'static str {
    "Chatline relay is running"
}

/// GET /health - Liveness plus the count of active sessions.
///
/// Informational only; no auth required.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "online",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "active_sessions": state.relay.sessions().active_sessions(),
    }))
}
