//! Domain-level errors.
//!
//! These errors represent constraint violations on academic records.
//! They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Domain-specific errors for constraint violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
