//! List Users Use Case

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use std::sync::Arc;

pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Empty store yields an empty list, never an error.
    pub async fn execute(&self) -> UserResult<Vec<User>> {
        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}
