//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_profile, get_profile, update_profile, ProfileHandlers};

/// Mounted at `/api/user/profile`.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .with_state(handlers)
}

/// Mounted at `/api/cognitive`.
pub fn cognitive_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/profile/analyze", post(analyze_profile))
        .with_state(handlers)
}
