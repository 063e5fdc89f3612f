//! API DTOs (Data Transfer Objects)

use crate::domain::entity::user::User;
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

/// Request for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Caller-chosen id, at most `MAX_USER_ID`; the store assigns one when absent
    #[serde(default)]
    pub id: Option<UserId>,
    pub name: String,
}

/// Request for PUT /users/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// A user as returned by every endpoint
///
/// `id` never exceeds `MAX_USER_ID`, so it is exact in double-precision JSON clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.into_inner(),
        }
    }
}
