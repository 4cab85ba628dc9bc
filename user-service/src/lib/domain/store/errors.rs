use thiserror::Error;

/// Failure reported by a storage backend.
///
/// `NotFound` is kept apart from every other failure so that services can
/// turn it into a domain error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

