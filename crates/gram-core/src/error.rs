//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;

use crate::domain::InvalidObjectId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidObjectId),

    #[error("{entity_type} does not exist")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{0} already exists")]
    Duplicate(&'static str),

    #[error(transparent)]
    Repository(#[from] RepoError),

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

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}
