//! HTTP routes for decision endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_decision, list_decisions, DecisionHandlers};

/// Mounted at `/api/decision`.
pub fn decision_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/analyze", post(analyze_decision))
        .with_state(handlers)
}

/// Mounted at `/api/decisions`.
pub fn decisions_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/", get(list_decisions))
        .with_state(handlers)
}
