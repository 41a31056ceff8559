//! HTTP routes for emotion endpoints.

use axum::{routing::get, Router};

use super::handlers::{emotion_insights, list_emotions, log_emotion, EmotionHandlers};

/// Mounted at `/api/emotions`.
pub fn emotion_routes(handlers: EmotionHandlers) -> Router {
    Router::new()
        .route("/", get(list_emotions).post(log_emotion))
        .route("/summary", get(emotion_insights))
        .route("/insights", get(emotion_insights))
        .with_state(handlers)
}
