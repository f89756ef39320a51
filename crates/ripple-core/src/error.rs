//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// The messages are user-facing and surfaced verbatim by the HTTP layer,
/// which maps each variant to its own status code.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        // Existence checks happen in the services; anything the repository
        // reports here is a server-side fault.
        DomainError::Internal(err.to_string())
    }
}
