//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Loja                                   │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── ValidationError ─────────────► VALIDATION_ERROR             │
//! │         │     "Preencha todos os campos"                                │
//! │         │                                                               │
//! │         ├── StoreError::Rejected(Duplicate) ► DUPLICATE                 │
//! │         │     "Produto já cadastrado com esse nome."                    │
//! │         │                                                               │
//! │         ├── StoreError (I/O, parse) ──────► STORAGE_ERROR               │
//! │         │     generic message, cause logged                             │
//! │         │                                                               │
//! │         └── Success ─────────────────────► printed result               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Under the lenient policy the storage branch is never taken: absorbed
//! failures come back as successful outcomes.

use serde::Serialize;
use thiserror::Error;

use loja_core::{CoreError, ValidationError};
use loja_store::StoreError;

/// Shown when storage fails outright (strict policy).
pub const STORAGE_UNAVAILABLE: &str = "Não foi possível acessar os dados. Verifique sua conexão.";

/// API error returned from commands.
///
/// ## Serialization
/// With `--json`, this is what a failing command prints:
/// ```json
/// {
///   "code": "DUPLICATE",
///   "message": "Produto já cadastrado com esse nome."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable message, shown to the user as is
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form or payload validation failed
    ValidationError,

    /// A product with that name is already registered
    Duplicate,

    /// The store could not be read or written
    StorageError,

    /// Bad configuration or environment
    Config,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Config, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn is_duplicate(&self) -> bool {
        self.code == ErrorCode::Duplicate
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(core) => core.into(),
            StoreError::Unavailable(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Store unavailable: {}", e);
                ApiError::new(ErrorCode::StorageError, STORAGE_UNAVAILABLE)
            }
            e @ (StoreError::Parse { .. } | StoreError::Encode { .. }) => {
                tracing::error!("Stored document unusable: {}", e);
                ApiError::new(ErrorCode::StorageError, STORAGE_UNAVAILABLE)
            }
            StoreError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Falha ao abrir o banco de dados")
            }
            StoreError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Falha ao preparar o banco de dados")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            e @ CoreError::DuplicateProduct { .. } => ApiError::new(ErrorCode::Duplicate, e.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}
