//! Authentication middleware and extractor for axum.
//!
//! ```text
//! Request → auth_middleware → validates token, loads User, injects it into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads it back
//! ```
//!
//! The middleware is applied only to protected routes, so a missing token
//! is rejected here rather than passed through.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::AuthError;
use crate::domain::user::User;
use crate::ports::{SessionValidator, UserRepository};

/// State needed to resolve the caller.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionValidator>,
    pub users: Arc<dyn UserRepository>,
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|rest| rest.split(' ').next())
        .filter(|token| !token.is_empty())
}

/// Validates the bearer token and injects the stored `User`.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return ApiError::from(AuthError::MissingToken).into_response();
    };

    let claims = match auth.sessions.validate(token).await {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "token rejected");
            return ApiError::from(e).into_response();
        }
    };

    match auth.users.find_by_id(&claims.id).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => ApiError::from(AuthError::UserNotFound).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Extractor for the authenticated user placed by `auth_middleware`.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
