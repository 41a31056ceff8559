//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": message, "code": CODE}`.
//! Status codes are chosen from the `ErrorCode` category in one place.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidFormat.to_string(), message)
    }

    /// A path id that does not parse.
    pub fn invalid_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidId.to_string(), "Invalid id")
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidId
        | ErrorCode::EmailAlreadyExists => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::UserNotFound | ErrorCode::CourseNotFound | ErrorCode::ItemNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::AIProviderError | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);
        if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "request failed");
        }
        // Store failures carry driver detail that stays in the log.
        let message = match err.code {
            ErrorCode::DatabaseError => "Internal server error".to_string(),
            _ => err.message,
        };
        Self::new(status, err.code.to_string(), message)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound => Self::new(
                StatusCode::NOT_FOUND,
                ErrorCode::UserNotFound.to_string(),
                err.to_string(),
            ),
            AuthError::ServiceUnavailable(ref reason) => {
                tracing::error!(reason = %reason, "token service unavailable");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.to_string(),
                    "Authentication unavailable",
                )
            }
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::TokenExpired => {
                Self::new(
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized.to_string(),
                    err.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
                code: self.code,
            }),
        )
            .into_response()
    }
}

/// JSON body extractor that rejects with the standard error shape.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        let err: ApiError = DomainError::new(ErrorCode::CourseNotFound, "Course not found").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "COURSE_NOT_FOUND");
        assert_eq!(err.message, "Course not found");
    }

    #[test]
    fn duplicate_email_is_a_bad_request() {
        let err: ApiError =
            DomainError::new(ErrorCode::EmailAlreadyExists, "Email already exists").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_detail_is_hidden() {
        let err: ApiError = DomainError::database("insert user", "connection reset").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn auth_errors_keep_client_messages() {
        let missing: ApiError = AuthError::MissingToken.into();
        assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
        assert_eq!(missing.message, "Access denied. Token missing!");

        let expired: ApiError = AuthError::TokenExpired.into();
        assert_eq!(expired.message, "Session expired, please login again");

        let gone: ApiError = AuthError::UserNotFound.into();
        assert_eq!(gone.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn ai_failure_is_a_server_error() {
        let err: ApiError =
            DomainError::new(ErrorCode::AIProviderError, "AI failed to generate a response").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "AI failed to generate a response");
    }
}
