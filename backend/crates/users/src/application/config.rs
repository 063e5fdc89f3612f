//! Application Configuration
//!
//! Configuration for the users application layer.

use crate::domain::value_object::USER_NAME_MAX_LENGTH;

/// Users application configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Maximum user name length in characters
    pub max_name_length: usize,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            max_name_length: USER_NAME_MAX_LENGTH,
        }
    }
}

impl UsersConfig {
    pub fn with_max_name_length(max_name_length: usize) -> Self {
        Self { max_name_length }
    }
}
