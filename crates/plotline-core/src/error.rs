//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Plot not found for the given ID
    #[error("Plot with ID {id} not found")]
    PlotNotFound { id: String },
    /// Stage not found for the given ID
    #[error("Stage with ID {id} not found")]
    StageNotFound { id: String },
    /// Issue not found for the given ID
    #[error("Issue with ID {id} not found")]
    IssueNotFound { id: String },
    /// A date string that could not be understood
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
    /// Calendar arithmetic left the supported date range
    #[error("Date arithmetic error: {source}")]
    DateArithmetic {
        #[from]
        source: jiff::Error,
    },
    /// Stage catalog is empty or malformed
    #[error("Stage catalog error: {message}")]
    Catalog { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a catalog error with the given message.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Returns true for the "unknown id" family of errors.
    ///
    /// These leave the caller's plot untouched and are safe to report back to
    /// the user as-is.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlotNotFound { .. } | Self::StageNotFound { .. } | Self::IssueNotFound { .. }
        )
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TrackerError::invalid_input("name").with_reason("must not be blank");
        match &err {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "name");
                assert_eq!(reason, "must not be blank");
            }
            _ => panic!("Expected InvalidInput error"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be blank"
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(TrackerError::StageNotFound { id: "x".into() }.is_not_found());
        assert!(TrackerError::IssueNotFound { id: "x".into() }.is_not_found());
        assert!(TrackerError::PlotNotFound { id: "x".into() }.is_not_found());
        assert!(!TrackerError::catalog("empty").is_not_found());
    }
}
