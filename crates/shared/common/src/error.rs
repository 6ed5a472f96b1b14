//! Unified error handling for the academic services.
//!
//! Wraps domain errors and database failures in a single type with stable
//! error codes and user-facing messages that hide internal details.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Database Error Classification
// =============================================================================

#[cfg(feature = "database")]
impl AppError {
    /// Translate a store-level constraint violation on `entity`.
    ///
    /// Unique violations become `Conflict`, foreign key violations become
    /// `Validation`; everything else stays a `Database` error.
    pub fn from_db(err: sea_orm::DbErr, entity: &str) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity),
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::validation(format!("{} references a record that does not exist", entity))
            }
            _ => AppError::Database(err),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_keeps_its_message() {
        assert!(matches!(
            AppError::from(DomainError::validation("too long")),
            AppError::Validation(msg) if msg == "too long"
        ));
    }

    #[test]
    fn conflict_message_names_the_entity() {
        let err = AppError::conflict("Course");
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.user_message(), "Course already exists");
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn missing_option_is_not_found() {
        let value: Option<u8> = None;
        assert!(matches!(value.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
