//! # Error Types
//!
//! Domain-specific error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loja-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Registration form failures                     │
//! │                                                                         │
//! │  loja-store errors (separate crate)                                    │
//! │  └── StoreError       - Store I/O, parse failures, rejected writes     │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the screen shows                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Screen    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are the ones shown to the operator, so they are in Portuguese.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A product with the same `nome` is already registered.
    ///
    /// ## When This Occurs
    /// - Registering "Arroz" twice
    /// - Names differing only by case are NOT duplicates ("arroz" ≠ "Arroz")
    #[error("Produto já cadastrado com esse nome.")]
    DuplicateProduct { nome: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Registration form validation errors.
///
/// Raised before any repository call; a form that fails validation never
/// reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// At least one of nome, descrição, preço, categoria is empty.
    #[error("Preencha todos os campos")]
    MissingFields { fields: Vec<String> },

    /// Name or category shorter than the minimum.
    #[error("Nome e categoria devem ter pelo menos {min} caracteres")]
    TooShort { field: String, min: usize },

    /// Price is not `digits[.d[d]]` or is not greater than zero.
    #[error("Preço deve ser um número válido e positivo")]
    InvalidPrice { value: String },

    /// Category is not one of the registered categories.
    #[error("Categoria inválida: {categoria}")]
    UnknownCategory {
        categoria: String,
        allowed: Vec<String>,
    },

    /// Sale payload is not a JSON object.
    #[error("Venda inválida: {reason}")]
    InvalidSale { reason: String },
}
