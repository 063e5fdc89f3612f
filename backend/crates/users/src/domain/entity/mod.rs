//! Entity Module

pub mod user;

pub use user::{MAX_USER_ID, NewUser, User};
