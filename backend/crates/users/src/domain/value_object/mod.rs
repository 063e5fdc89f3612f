//! Value Object Module

pub mod user_name;

pub use user_name::{USER_NAME_MAX_LENGTH, UserName, UserNameError};
