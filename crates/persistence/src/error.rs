//! Error types for the storage layer.

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No document with the given id exists in the collection.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A document with the given id already exists in the collection.
    #[error("document already exists: {collection}/{id}")]
    AlreadyExists { collection: String, id: String },

    /// The document could not be converted to the backend representation.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The backend could not be reached.
    #[error("connection failure: {0}")]
    Connection(String),

    /// The backend reported an operation failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// The storage configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// True for errors caused by the document/id rather than the backend.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound { .. } | StorageError::AlreadyExists { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StorageError::NotFound {
            collection: "recipes".to_string(),
            id: "r-1".to_string(),
        };
        assert_eq!(err.to_string(), "document not found: recipes/r-1");

        let err = StorageError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "connection failure: refused");
    }

    #[test]
    fn test_state_error_classification() {
        let not_found = StorageError::NotFound {
            collection: "recipes".to_string(),
            id: "r-1".to_string(),
        };
        assert!(not_found.is_state_error());
        assert!(!StorageError::Backend("boom".to_string()).is_state_error());
    }
}
