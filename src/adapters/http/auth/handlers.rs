//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, JsonBody};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{LoginHandler, RegisterHandler};

use super::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterHandler>,
    login_handler: Arc<LoginHandler>,
}

impl AuthHandlers {
    pub fn new(register_handler: Arc<RegisterHandler>, login_handler: Arc<LoginHandler>) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            Arc::new(RegisterHandler::new(state.users.clone(), state.hasher.clone())),
            Arc::new(LoginHandler::new(
                state.users.clone(),
                state.hasher.clone(),
                state.tokens.clone(),
            )),
        )
    }
}

/// POST /api/auth/register
pub async fn register(
    State(handlers): State<AuthHandlers>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Response, ApiError> {
    handlers.register_handler.handle(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    )
        .into_response())
}

/// POST /api/auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = handlers.login_handler.handle(req.into()).await?;
    Ok(Json(result.into()))
}
