//! Token ports: validating bearer tokens and issuing them at login.
//!
//! Both sides are provider-agnostic. The HS256 adapter implements both;
//! tests use the mock validator.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for misconfiguration
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// A freshly issued access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in_secs: i64,
}

/// Issues signed access tokens after a successful login.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: &UserId, email: &str) -> Result<IssuedToken, AuthError>;
}
