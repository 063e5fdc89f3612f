//! User Entity

use crate::domain::value_object::UserName;
use kernel::id::UserId;

/// Largest identifier the service hands out or accepts (2^53 - 1)
///
/// JSON clients that read numbers as IEEE doubles represent every id up to
/// this value exactly.
pub const MAX_USER_ID: u64 = (1 << 53) - 1;

/// A stored user record. The id never changes after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
}

impl User {
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Replace the name, keeping the identifier.
    pub fn rename(&mut self, name: UserName) {
        self.name = name;
    }
}

/// A user that has not been stored yet.
///
/// `id` is `None` when the store should assign one.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub name: UserName,
}

impl NewUser {
    pub fn new(name: UserName) -> Self {
        Self { id: None, name }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}
