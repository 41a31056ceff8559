//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::adapters::http::error::{ApiError, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    AnalyzeProfileCommand, AnalyzeProfileHandler, GetProfileHandler, GetProfileQuery,
    UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::foundation::DomainError;
use crate::domain::user::ProfileUpdate;

use super::dto::ProfileResponse;

#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
    update_handler: Arc<UpdateProfileHandler>,
    analyze_handler: Arc<AnalyzeProfileHandler>,
}

impl ProfileHandlers {
    pub fn new(
        get_handler: Arc<GetProfileHandler>,
        update_handler: Arc<UpdateProfileHandler>,
        analyze_handler: Arc<AnalyzeProfileHandler>,
    ) -> Self {
        Self {
            get_handler,
            update_handler,
            analyze_handler,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::new(GetProfileHandler::new(state.users.clone())),
            Arc::new(UpdateProfileHandler::new(state.users.clone())),
            Arc::new(AnalyzeProfileHandler::new(
                state.users.clone(),
                state.emotions.clone(),
                state.decisions.clone(),
                state.courses.clone(),
            )),
        )
    }
}

/// GET /api/user/profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = handlers
        .get_handler
        .handle(GetProfileQuery { user_id: user.id })
        .await?;
    Ok(Json(user.into()))
}

/// PUT /api/user/profile
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let update = ProfileUpdate::from_json(&body).map_err(DomainError::from)?;
    let user = handlers
        .update_handler
        .handle(UpdateProfileCommand {
            user_id: user.id,
            update,
        })
        .await?;
    Ok(Json(user.into()))
}

/// POST /api/cognitive/profile/analyze
pub async fn analyze_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = handlers
        .analyze_handler
        .handle(AnalyzeProfileCommand { user_id: user.id })
        .await?;
    Ok(Json(user.into()))
}
