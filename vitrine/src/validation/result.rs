use thiserror::Error;

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field_id}: {message}")]
pub struct FieldError {
    /// Element ID of the field (for focusing).
    pub field_id: String,
    /// Error message shown next to the field.
    pub message: String,
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All checked fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in document order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build a result from collected errors.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the ID of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field_id.as_str())
    }
}
