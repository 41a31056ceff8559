//! RegisterHandler - Command handler for creating student accounts.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Registration, User};
use crate::ports::{PasswordHasher, UserRepository};

/// Raw registration input. Fields are optional so missing keys are
/// reported as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<UserId, DomainError> {
        let registration = Registration::parse(
            cmd.name.as_deref(),
            cmd.email.as_deref(),
            cmd.password.as_deref(),
        )
        .map_err(|_| DomainError::new(ErrorCode::EmptyField, "All fields are required"))?;

        if self.users.find_by_email(&registration.email).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyExists,
                "Email already exists",
            ));
        }

        let password_hash = self.hasher.hash(&registration.password).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            DomainError::new(ErrorCode::InternalError, "Registration failed")
        })?;

        let user = User::new(registration, password_hash);
        self.users.save(&user).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::password::Argon2Hasher;
    use crate::application::handlers::test_support::Stores;

    fn handler(stores: &Stores) -> RegisterHandler {
        RegisterHandler::new(stores.users(), Arc::new(Argon2Hasher::default()))
    }

    fn command(name: &str, email: &str, password: &str) -> RegisterCommand {
        RegisterCommand {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn registers_with_hashed_password_and_normalized_email() {
        let stores = Stores::new();
        let id = handler(&stores)
            .handle(command("Ada", "  Ada@Example.COM ", "hunter22"))
            .await
            .unwrap();

        let stored = stores.users.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.email, "ada@example.com");
        assert_ne!(stored.password_hash, "hunter22");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn missing_field_rejected() {
        let stores = Stores::new();
        let err = handler(&stores)
            .handle(RegisterCommand {
                name: Some("Ada".to_string()),
                email: None,
                password: Some("pw".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.message, "All fields are required");
        assert!(stores.users.is_empty().await);
    }

    #[tokio::test]
    async fn duplicate_email_rejected_case_insensitively() {
        let stores = Stores::new();
        let handler = handler(&stores);
        handler.handle(command("Ada", "ada@example.com", "pw")).await.unwrap();

        let err = handler
            .handle(command("Imposter", "ADA@example.com", "pw2"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyExists);
        assert_eq!(err.message, "Email already exists");
    }
}
