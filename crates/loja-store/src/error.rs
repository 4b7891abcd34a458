//! # Store Error Types
//!
//! Error types for key-value and repository operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (sqlx::Error, lock, disk) ──► StoreError::Unavailable │
//! │  Malformed document (serde_json::Error)    ──► StoreError::Parse       │
//! │  Business rule (CoreError::DuplicateProduct) ► StoreError::Rejected    │
//! │                                                                         │
//! │  Unavailable / Parse : absorbed under FailurePolicy::Lenient           │
//! │  Rejected            : always returned to the caller                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use loja_core::CoreError;
use thiserror::Error;

/// Key-value store and repository errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read or written.
    ///
    /// ## When This Occurs
    /// - Database file locked, missing permissions, disk full
    /// - Pool closed or timed out
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A persisted document is not a valid collection.
    #[error("Malformed document under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized.
    #[error("Could not encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A business rule refused the write (duplicate product name).
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// Opening the backing database failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl StoreError {
    /// True for the duplicate-name rejection raised by product registration.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            StoreError::Rejected(CoreError::DuplicateProduct { .. })
        )
    }

    /// True for business-rule rejections, which no policy absorbs.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Rejected(_))
    }

    /// True for malformed persisted documents.
    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}

/// Convert sqlx errors to StoreError.
///
/// Everything the SQLite backend can raise at query time means the store
/// is not usable right now.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::Unavailable("connection pool exhausted".to_string()),
            sqlx::Error::PoolClosed => StoreError::Unavailable("pool is closed".to_string()),
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
