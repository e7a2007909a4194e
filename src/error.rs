use thiserror::Error;

/// Reasons a user cannot be created. Raised only by `create_user`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Invalid age: {0} (expected 0..=150)")]
    InvalidAge(i64),
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),
}

/// Errors surfaced by [`crate::clients::UserClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid max users value {value:?}: {reason}")]
    InvalidMaxUsers { value: String, reason: String },
}
