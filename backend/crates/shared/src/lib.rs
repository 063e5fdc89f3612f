//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary shared by the `users` and `shipping` crates:
//! - Common error types and result aliases
//! - Typed integer identifiers
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
