//! Unified error types for the record store, validators and reports.

use std::fmt;
use thiserror::Error;

/// The reason a submitted record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required field was empty after trimming
    MissingField,
    /// A numeric field did not parse
    TypeMismatch,
    /// The uniqueness key already exists in the collection
    DuplicateKey,
    /// An enrollment referenced a student id that no student has
    UnknownStudent,
    /// An enrollment referenced a grade no student is in
    UnknownGrade,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MissingField => "missing field",
            Self::TypeMismatch => "type mismatch",
            Self::DuplicateKey => "duplicate key",
            Self::UnknownStudent => "unknown student",
            Self::UnknownGrade => "unknown grade",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind}: {detail}")]
    Validation { kind: ValidationKind, detail: String },

    #[error("Storage error on {collection}: {message}")]
    Storage { collection: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub(crate) fn storage(collection: impl fmt::Display, message: impl Into<String>) -> Self {
        Self::Storage {
            collection: collection.to_string(),
            message: message.into(),
        }
    }

    /// The validation kind, if this is a validation failure.
    #[must_use]
    pub const fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_kind_then_detail() {
        let err = Error::validation(ValidationKind::DuplicateKey, "name 'Math' already exists");
        assert_eq!(err.to_string(), "duplicate key: name 'Math' already exists");
        assert_eq!(err.validation_kind(), Some(ValidationKind::DuplicateKey));
    }

    #[test]
    fn test_storage_error_has_no_validation_kind() {
        let err = Error::storage("students", "permission denied");
        assert_eq!(
            err.to_string(),
            "Storage error on students: permission denied"
        );
        assert!(err.validation_kind().is_none());
    }
}
