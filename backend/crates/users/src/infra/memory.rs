//! In-Memory Repository Implementation

use crate::domain::entity::user::{MAX_USER_ID, NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserName;
use crate::error::{UserError, UserResult};
use kernel::id::UserId;
use std::collections::HashMap;
use std::iter;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    /// Highest id ever stored, assigned or caller-supplied
    last_id: Option<UserId>,
}

impl StoreState {
    /// Next id above the high-water mark, or the lowest free id once the
    /// mark has reached `MAX_USER_ID`.
    fn allocate_id(&self) -> UserResult<UserId> {
        let first = UserId::new(1).ok();
        let after_last = match self.last_id {
            Some(last) => last.next(),
            None => first,
        };

        self.free_from(after_last)
            .or_else(|| self.free_from(first))
            .ok_or_else(|| UserError::Internal("user id space exhausted".to_string()))
    }

    fn free_from(&self, start: Option<UserId>) -> Option<UserId> {
        iter::successors(start, UserId::next)
            .take_while(|id| id.get() <= MAX_USER_ID)
            .find(|id| !self.users.contains_key(id))
    }

    fn insert(&mut self, user: User) {
        self.last_id = self.last_id.max(Some(user.id));
        self.users.insert(user.id, user);
    }
}

/// Process-local user store
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `users`.
    ///
    /// Later users overwrite earlier ones with the same id.
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        let mut state = StoreState::default();
        for user in users {
            state.insert(user);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let state = self.state.read().await;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn create(&self, new_user: NewUser) -> UserResult<User> {
        let mut state = self.state.write().await;

        let id = match new_user.id {
            Some(id) if state.users.contains_key(&id) => return Err(UserError::IdTaken(id)),
            Some(id) => id,
            None => state.allocate_id()?,
        };

        let user = User::new(id, new_user.name);
        state.insert(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn update_name(&self, id: UserId, name: UserName) -> UserResult<Option<User>> {
        let mut state = self.state.write().await;
        Ok(state.users.get_mut(&id).map(|user| {
            user.rename(name);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        Ok(self.state.write().await.users.remove(&id).is_some())
    }
}
