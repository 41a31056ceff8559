//! Top-level router.
//!
//! Public routes (liveness, register, login) sit outside the auth layer;
//! every other `/api` route requires a bearer token.

use axum::{middleware, routing::get, Json, Router};

use super::auth::{auth_routes, AuthHandlers, MessageResponse};
use super::course::{course_routes, CourseHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::decision::{decision_routes, decisions_routes, DecisionHandlers};
use super::emotion::{emotion_routes, EmotionHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::profile::{cognitive_routes, profile_routes, ProfileHandlers};
use super::state::AppState;

/// GET /
async fn liveness() -> Json<MessageResponse> {
    Json(MessageResponse::new("NeuroLink backend is running"))
}

/// Builds the full API router from shared state.
pub fn api_router(state: AppState) -> Router {
    let auth_state = AuthState {
        sessions: state.sessions.clone(),
        users: state.users.clone(),
    };

    let profile = ProfileHandlers::from_state(&state);
    let decision = DecisionHandlers::from_state(&state);

    let protected = Router::new()
        .nest("/api/user/profile", profile_routes(profile.clone()))
        .nest("/api/cognitive", cognitive_routes(profile))
        .nest("/api/dashboard", dashboard_routes(DashboardHandlers::from_state(&state)))
        .nest("/api/emotions", emotion_routes(EmotionHandlers::from_state(&state)))
        .nest("/api/decision", decision_routes(decision.clone()))
        .nest("/api/decisions", decisions_routes(decision))
        .nest("/api/courses", course_routes(CourseHandlers::from_state(&state)))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/", get(liveness))
        .nest("/api/auth", auth_routes(AuthHandlers::from_state(&state)))
        .merge(protected)
}
