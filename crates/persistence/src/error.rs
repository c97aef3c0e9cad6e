//! Error types for the persistence layer.
//!
//! Errors are split into two families: [`QueryError`] for failures detected
//! while assembling a query (before any storage call is made), and
//! [`BackendError`] for failures surfaced by a storage executor. Both are
//! wrapped by the top-level [`StorageError`].

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all search operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Query assembly errors. No storage call was made.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Backend-specific errors raised while executing a query.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if the error was raised before the executor was invoked.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, StorageError::Query(_))
    }
}

/// Errors raised while translating a filter specification into a query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A caller-supplied argument cannot be used to build a query.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A consequence-type label carries no numeric ontology code.
    #[error("consequence type '{label}' does not contain an ontology code")]
    ParseError { label: String },

    /// A score filter carries a value but no relational operator.
    #[error("illegal operator NONE for filter on '{field}'")]
    IllegalOperator { field: String },
}

impl QueryError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Errors originating from the storage executor.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for query assembly.
pub type QueryResult<T> = Result<T, QueryError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "mongodb".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::bson::ser::Error> for StorageError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}
