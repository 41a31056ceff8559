//! HTTP handlers for emotion endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    EmotionInsightsHandler, EmotionInsightsQuery, ListEmotionsHandler, ListEmotionsQuery,
    LogEmotionCommand, LogEmotionHandler,
};
use crate::domain::emotion::EmotionInsight;

use super::dto::{EmotionResponse, LogEmotionRequest, LogEmotionResponse};

#[derive(Clone)]
pub struct EmotionHandlers {
    log_handler: Arc<LogEmotionHandler>,
    list_handler: Arc<ListEmotionsHandler>,
    insights_handler: Arc<EmotionInsightsHandler>,
}

impl EmotionHandlers {
    pub fn new(
        log_handler: Arc<LogEmotionHandler>,
        list_handler: Arc<ListEmotionsHandler>,
        insights_handler: Arc<EmotionInsightsHandler>,
    ) -> Self {
        Self {
            log_handler,
            list_handler,
            insights_handler,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::new(LogEmotionHandler::new(
                state.emotions.clone(),
                state.ai.clone(),
                state.ai_timeout,
            )),
            Arc::new(ListEmotionsHandler::new(state.emotions.clone())),
            Arc::new(EmotionInsightsHandler::new(state.emotions.clone())),
        )
    }
}

/// POST /api/emotions
pub async fn log_emotion(
    State(handlers): State<EmotionHandlers>,
    RequireAuth(user): RequireAuth,
    JsonBody(req): JsonBody<LogEmotionRequest>,
) -> Result<Response, ApiError> {
    let intensity = req.intensity()?;
    let record = handlers
        .log_handler
        .handle(LogEmotionCommand {
            user_id: user.id,
            emotion: req.emotion,
            intensity,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(LogEmotionResponse::from(record))).into_response())
}

/// GET /api/emotions
pub async fn list_emotions(
    State(handlers): State<EmotionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<EmotionResponse>>, ApiError> {
    let records = handlers
        .list_handler
        .handle(ListEmotionsQuery { user_id: user.id })
        .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /api/emotions/summary and GET /api/emotions/insights
pub async fn emotion_insights(
    State(handlers): State<EmotionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<EmotionInsight>, ApiError> {
    let insight = handlers
        .insights_handler
        .handle(EmotionInsightsQuery { user_id: user.id })
        .await?;
    Ok(Json(insight))
}
