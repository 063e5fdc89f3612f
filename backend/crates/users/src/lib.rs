//! Users Backend Module
//!
//! In-memory CRUD service for the `User` resource.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Store Model
//! - The store is an explicit object injected into the router state, never a global
//! - Every repository operation takes a single lock; update and delete check
//!   existence and mutate under the same write guard

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::UserId;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
