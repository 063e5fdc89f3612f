//! User Name Value Object
//!
//! Display name of a user. Stored exactly as submitted; the empty string is
//! a valid name.
//!
//! ## Invariants
//! - At most `max_length` characters (Unicode scalar values)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Name exceeds the configured maximum
    TooLong { length: usize, max: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length, max } => {
                write!(f, "name is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate with the default maximum length.
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        Self::with_max_length(input, USER_NAME_MAX_LENGTH)
    }

    /// Validate against a configured maximum length.
    pub fn with_max_length(input: impl Into<String>, max: usize) -> Result<Self, UserNameError> {
        let name = input.into();
        let length = name.chars().count();
        if length > max {
            return Err(UserNameError::TooLong { length, max });
        }
        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
