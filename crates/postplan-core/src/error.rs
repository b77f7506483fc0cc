//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid status transition: {from} -> {to}")]
    StatusTransition { from: &'static str, to: &'static str },
}

/// Repository-level errors.
///
/// The in-memory store only ever produces `NotFound`; `Backend` keeps the
/// error channel open for a persistent adapter.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage backend failed: {0}")]
    Backend(String),
}
