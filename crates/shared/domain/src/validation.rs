//! Field constraint checks shared by every entity.

use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// Validate an entity or update payload, reporting the first violated rule.
pub fn validate_input<T: Validate>(value: &T) -> DomainResult<()> {
    value.validate().map_err(|e| {
        let message = e
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        DomainError::validation(message)
    })
}
