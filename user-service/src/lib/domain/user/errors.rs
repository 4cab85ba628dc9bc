use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::store::RepositoryError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user and authentication operations.
///
/// The first three variants are domain outcomes and are compared by value.
/// `Infrastructure` wraps any storage or crypto failure; its message is fixed
/// and the carried detail is only meant for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error")]
    Infrastructure(String),
}

impl UserError {
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, UserError::Infrastructure(_))
    }
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => UserError::NotFound,
            RepositoryError::Conflict(_) | RepositoryError::Database(_) => {
                UserError::Infrastructure(err.to_string())
            }
        }
    }
}

impl From<PasswordError> for UserError {
    fn from(err: PasswordError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}

impl From<JwtError> for UserError {
    fn from(err: JwtError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}
