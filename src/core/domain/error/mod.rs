use thiserror::Error;

/// The main error type for inventory discovery.
///
/// Only problems with the run's configuration surface as errors. Anomalies
/// found in individual nodes (duplicate xnames, non-conforming xnames, UUID
/// generation failures) never abort a run; they are reported as
/// [`DiscoveryWarning`](crate::DiscoveryWarning)s alongside the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Represents validation failures of the run configuration
    ///
    /// # Fields
    /// * `0` - The underlying validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a DiscoveryError
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_into_discovery_error() {
        let error: DiscoveryError = ValidationError::Format("bad".to_string()).into();
        assert_eq!(
            error,
            DiscoveryError::Validation(ValidationError::Format("bad".to_string()))
        );
        assert_eq!(error.to_string(), "Validation error: Format error: bad");
    }

    #[test]
    fn test_field_error_message() {
        let error = ValidationError::Field {
            field: "base_uri".to_string(),
            message: "Base URI is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Field 'base_uri' validation failed: Base URI is required"
        );
    }
}
