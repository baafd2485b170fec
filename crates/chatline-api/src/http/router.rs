//! Axum router configuration.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the relay router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/on-new-message", post(handlers::message::on_new_message))
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
