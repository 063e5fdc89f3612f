//! Update User Use Case
//!
//! Replaces the name of an existing user. The identifier never changes.

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserName;
use crate::error::{UserError, UserResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Update user input
pub struct UpdateUserInput {
    pub id: UserId,
    pub name: String,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> UserResult<User> {
        // Name is validated before the lookup so a bad payload is 400 even for unknown ids
        let name = UserName::with_max_length(input.name, self.config.max_name_length)
            .map_err(|e| UserError::InvalidName(e.to_string()))?;

        let user = self
            .repo
            .update_name(input.id, name)
            .await?
            .ok_or(UserError::NotFound(input.id))?;

        tracing::info!(user_id = %user.id, user_name = %user.name, "User updated");

        Ok(user)
    }
}
