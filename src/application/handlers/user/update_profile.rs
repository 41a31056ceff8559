//! UpdateProfileHandler - Command handler applying a validated profile patch.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ProfileUpdate, User};
use crate::ports::UserRepository;

use super::load_user;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

pub struct UpdateProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Applies the update and returns the stored user. An empty update is
    /// a no-op that still returns the current profile.
    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<User, DomainError> {
        let mut user = load_user(self.users.as_ref(), &cmd.user_id).await?;
        if cmd.update.is_empty() {
            return Ok(user);
        }

        user.apply_profile_update(cmd.update);
        self.users.update(&user).await?;

        tracing::debug!(user_id = %user.id, "profile updated");
        Ok(user)
    }
}
