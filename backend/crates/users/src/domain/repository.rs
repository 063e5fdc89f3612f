//! Repository Trait
//!
//! Interface for user storage. Implementation is in the infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::UserName;
use crate::error::UserResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// All stored users, ascending by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Insert a user, assigning an id when none is given.
    ///
    /// Fails with `IdTaken` when the given id is already stored.
    async fn create(&self, new_user: NewUser) -> UserResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// Replace the name of an existing user; `None` if absent
    async fn update_name(&self, id: UserId, name: UserName) -> UserResult<Option<User>>;

    /// Remove a user; `false` if absent
    async fn delete(&self, id: UserId) -> UserResult<bool>;
}
