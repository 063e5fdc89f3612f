//! Get User Use Case

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use kernel::id::UserId;
use std::sync::Arc;

pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> UserResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}
