//! Delete User Use Case

use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use kernel::id::UserId;
use std::sync::Arc;

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> UserResult<()> {
        if !self.repo.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
