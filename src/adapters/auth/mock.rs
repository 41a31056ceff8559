//! In-process token adapter for tests.
//!
//! Tokens are opaque strings kept in a map. Issuing a token registers it,
//! so a login followed by an authenticated request works without signing.
//!
//! ```ignore
//! let tokens = MockSessionValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(user_id, "ada@example.com"));
//! let user = tokens.validate("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Token map standing in for signed bearer tokens.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        write(&self.tokens).insert(token.into(), user);
        self
    }

    /// Make every validation fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *write(&self.force_error) = Some(error);
        self
    }

    pub fn clear_error(&self) {
        *write(&self.force_error) = None;
    }

    pub fn remove_token(&self, token: &str) {
        write(&self.tokens).remove(token);
    }

    pub fn token_count(&self) -> usize {
        read(&self.tokens).len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = read(&self.force_error).clone() {
            return Err(error);
        }

        read(&self.tokens)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

impl TokenIssuer for MockSessionValidator {
    fn issue(&self, user_id: &UserId, email: &str) -> Result<IssuedToken, AuthError> {
        let token = format!("mock-{}", uuid::Uuid::new_v4());
        write(&self.tokens).insert(token.clone(), AuthenticatedUser::new(*user_id, email));
        Ok(IssuedToken {
            token,
            expires_in_secs: 8 * 3600,
        })
    }
}
