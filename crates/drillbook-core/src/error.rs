//! Error types for the drillbook library.

use std::path::PathBuf;

use thiserror::Error;

use crate::ids::{ItemId, SupersetId};

/// Comprehensive error type for all drillbook operations.
#[derive(Error, Debug)]
pub enum DrillbookError {
    /// A scalar field failed validation (title, focus area, duration, ...)
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Week index does not exist in the document
    #[error("Week {index} not found (document has {len} weeks)")]
    WeekNotFound { index: usize, len: usize },

    /// Item id does not exist in the addressed day
    #[error("Item '{id}' not found in {location}")]
    ItemNotFound { id: ItemId, location: String },

    /// A document must always keep at least one week
    #[error("Cannot remove the last remaining week")]
    LastWeek,

    /// Both items already belong to different supersets
    #[error("Item '{item}' already belongs to superset '{group}'")]
    SupersetConflict { item: ItemId, group: SupersetId },

    /// Reorder request whose ids do not match the target list
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    /// Routine not found for the given ID
    #[error("Routine with ID {id} not found")]
    RoutineNotFound { id: u64 },

    /// Saved program not found for the given ID
    #[error("Program with ID {id} not found")]
    ProgramNotFound { id: u64 },

    /// Draft not found for the given ID
    #[error("Draft with ID {id} not found")]
    DraftNotFound { id: u64 },

    /// Video descriptor not found for the given ID
    #[error("Video '{id}' not found")]
    VideoNotFound { id: String },

    /// Saving through the persistence boundary failed; the document is intact
    #[error("Save failed: {message}")]
    Persistence { message: String },

    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

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

/// Coarse classification used by callers to decide how to surface a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Scalar field problems; the workflow is blocked but the document is intact
    Validation,
    /// A mutation referenced something that is not there; nothing changed
    StructuralPrecondition,
    /// A reorder request did not describe a permutation of the target list
    InvalidPermutation,
    /// The save call failed; retry by saving again
    Persistence,
    /// Local infrastructure failure (database file, paths, encoding)
    Infrastructure,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> DrillbookError {
        DrillbookError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DrillbookError {
        DrillbookError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DrillbookError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Maps the error onto the editor's error taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::WeekNotFound { .. }
            | Self::ItemNotFound { .. }
            | Self::LastWeek
            | Self::SupersetConflict { .. }
            | Self::RoutineNotFound { .. }
            | Self::ProgramNotFound { .. }
            | Self::DraftNotFound { .. }
            | Self::VideoNotFound { .. } => ErrorCategory::StructuralPrecondition,
            Self::InvalidPermutation { .. } => ErrorCategory::InvalidPermutation,
            Self::Persistence { .. } => ErrorCategory::Persistence,
            Self::Database { .. }
            | Self::FileSystem { .. }
            | Self::XdgDirectory(_)
            | Self::Serialization { .. }
            | Self::Configuration { .. } => ErrorCategory::Infrastructure,
        }
    }

    /// Whether re-issuing the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Persistence
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DrillbookError::database(message).with_source(e))
    }
}

/// Result type alias for drillbook operations
pub type Result<T> = std::result::Result<T, DrillbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_builder() {
        let err = DrillbookError::validation("title").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': must not be empty"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_structural_categories() {
        assert_eq!(
            DrillbookError::LastWeek.category(),
            ErrorCategory::StructuralPrecondition
        );
        assert_eq!(
            DrillbookError::WeekNotFound { index: 4, len: 2 }.category(),
            ErrorCategory::StructuralPrecondition
        );
        assert_eq!(
            DrillbookError::InvalidPermutation {
                reason: "x".to_string()
            }
            .category(),
            ErrorCategory::InvalidPermutation
        );
    }

    #[test]
    fn test_only_persistence_is_retryable() {
        let err = DrillbookError::Persistence {
            message: "connection reset".to_string(),
        };
        assert!(err.is_retryable());
        assert!(err.to_string().contains("connection reset"));

        let db = DrillbookError::database("boom").with_source(rusqlite::Error::InvalidQuery);
        assert_eq!(db.category(), ErrorCategory::Infrastructure);
        assert!(!db.is_retryable());
    }
}
