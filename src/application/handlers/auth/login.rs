//! LoginHandler - Command handler exchanging credentials for a bearer token.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{normalize_email, User};
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: User,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::InvalidCredentials, "Invalid email or password")
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let email = cmd.email.as_deref().map(normalize_email).unwrap_or_default();
        let password = cmd.password.unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                "Email and password are required",
            ));
        }

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let matches = self
            .hasher
            .verify(&password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "stored password hash unreadable");
                invalid_credentials()
            })?;
        if !matches {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(invalid_credentials());
        }

        let token = self.tokens.issue(&user.id, &user.email).map_err(|e| {
            tracing::error!(error = %e, "token issuing failed");
            DomainError::new(ErrorCode::InternalError, "Login failed")
        })?;

        Ok(LoginResult { token, user })
    }
}
