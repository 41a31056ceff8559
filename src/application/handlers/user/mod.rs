//! Profile queries and updates.

mod get_profile;
mod update_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Loads a user or fails with `UserNotFound`.
pub(crate) async fn load_user(
    users: &dyn UserRepository,
    user_id: &UserId,
) -> Result<User, DomainError> {
    users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
}
