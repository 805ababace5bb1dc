//! Scenario-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ScenarioId, ValidationError};

/// Errors raised by scenario operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Scenario was not found.
    NotFound(ScenarioId),
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// Storage or other infrastructure error.
    Infrastructure(String),
}

impl ScenarioError {
    pub fn not_found(id: ScenarioId) -> Self {
        ScenarioError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ScenarioError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ScenarioError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ScenarioError::NotFound(_) => ErrorCode::ScenarioNotFound,
            ScenarioError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ScenarioError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ScenarioError::NotFound(id) => format!("Scenario not found: {}", id),
            ScenarioError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ScenarioError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ScenarioError {}

impl From<ValidationError> for ScenarioError {
    fn from(err: ValidationError) -> Self {
        ScenarioError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ScenarioError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ScenarioError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ScenarioError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variant() {
        assert_eq!(
            ScenarioError::not_found(ScenarioId::new()).code(),
            ErrorCode::ScenarioNotFound
        );
        assert_eq!(
            ScenarioError::validation("name", "blank").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ScenarioError::infrastructure("disk full").code(),
            ErrorCode::StorageError
        );
    }

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: ScenarioError = DomainError::validation("name", "Scenario name cannot be empty").into();
        assert_eq!(
            err,
            ScenarioError::validation("name", "Scenario name cannot be empty")
        );
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err: ScenarioError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert!(matches!(err, ScenarioError::Infrastructure(_)));
    }

    #[test]
    fn message_names_the_field() {
        let err: ScenarioError = ValidationError::empty_field("document").into();
        assert!(err.message().contains("'document'"));
    }
}
