//! Create User Use Case

use crate::application::config::UsersConfig;
use crate::domain::entity::user::{MAX_USER_ID, NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserName;
use crate::error::{UserError, UserResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Create user input
pub struct CreateUserInput {
    pub id: Option<UserId>,
    pub name: String,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        if let Some(id) = input.id.filter(|id| id.get() > MAX_USER_ID) {
            return Err(UserError::InvalidId(format!(
                "{id} is above the largest supported id {MAX_USER_ID}"
            )));
        }

        let name = UserName::with_max_length(input.name, self.config.max_name_length)
            .map_err(|e| UserError::InvalidName(e.to_string()))?;

        let new_user = match input.id {
            Some(id) => NewUser::new(name).with_id(id),
            None => NewUser::new(name),
        };

        let user = self.repo.create(new_user).await?;

        tracing::info!(user_id = %user.id, user_name = %user.name, "User created");

        Ok(user)
    }
}
