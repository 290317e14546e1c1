//! Validation error types

use std::fmt;

/// Validation error for submitted feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Branch or rating missing from the submission
    MissingRequired,

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Request body could not be decoded into a submission
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "branch and rating are required"),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => write!(
                f,
                "{} must be between {} and {} (got {})",
                field, min, max, value
            ),
            Self::Malformed { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "rating",
            min: 1,
            max: 5,
            value: 7,
        };
        assert_eq!(err.to_string(), "rating must be between 1 and 5 (got 7)");
    }

    #[test]
    fn missing_required_mentions_both_fields() {
        let msg = ValidationError::MissingRequired.to_string();
        assert!(msg.contains("branch"));
        assert!(msg.contains("rating"));
    }
}
