//! HTTP routes for auth endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, AuthHandlers};

/// Public routes; no token required.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(handlers)
}
