//! HTTP handlers for decision endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::{ApiError, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    AnalyzeDecisionCommand, AnalyzeDecisionHandler, ListDecisionsHandler, ListDecisionsQuery,
};
use crate::domain::decision::DecisionResult;

use super::dto::{AnalyzeDecisionRequest, DecisionResponse};

#[derive(Clone)]
pub struct DecisionHandlers {
    analyze_handler: Arc<AnalyzeDecisionHandler>,
    list_handler: Arc<ListDecisionsHandler>,
}

impl DecisionHandlers {
    pub fn new(
        analyze_handler: Arc<AnalyzeDecisionHandler>,
        list_handler: Arc<ListDecisionsHandler>,
    ) -> Self {
        Self {
            analyze_handler,
            list_handler,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::new(AnalyzeDecisionHandler::new(
                state.users.clone(),
                state.emotions.clone(),
                state.decisions.clone(),
                state.ai.clone(),
                state.ai_timeout,
            )),
            Arc::new(ListDecisionsHandler::new(state.decisions.clone())),
        )
    }
}

/// POST /api/decision/analyze - Responds with the normalized result only.
pub async fn analyze_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    JsonBody(req): JsonBody<AnalyzeDecisionRequest>,
) -> Result<Json<DecisionResult>, ApiError> {
    let decision = handlers
        .analyze_handler
        .handle(AnalyzeDecisionCommand {
            user_id: user.id,
            question: req.question,
        })
        .await?;
    Ok(Json(decision.result))
}

/// GET /api/decisions
pub async fn list_decisions(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<DecisionResponse>>, ApiError> {
    let decisions = handlers
        .list_handler
        .handle(ListDecisionsQuery { user_id: user.id })
        .await?;
    Ok(Json(decisions.into_iter().map(Into::into).collect()))
}
