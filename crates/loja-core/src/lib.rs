//! # loja-core: Pure Domain Logic for Product Registration
//!
//! Domain types and business rules shared by the storage layer and the
//! registration front-end. Nothing in here touches the key-value store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Loja Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Registration Form (apps/loja-cli)                │   │
//! │  │      ProductForm ──► validate ──► register_product              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │ form rules│                  │   │
//! │  │   │   Sale    │  │  (cents)  │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                loja-store (Persistence Layer)                   │   │
//! │  │         key-value store, JSON codec, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, categories)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Registration form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use loja_core::money::Money;
//!
//! let price: Money = "19.99".parse().unwrap();
//! assert_eq!(price.cents(), 1999);
//! assert_eq!(price.to_string(), "R$ 19,99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Categories seeded into an empty store.
///
/// Also the in-memory answer of a category listing when nothing has been
/// persisted yet.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Alimentos", "Bebidas", "Limpeza"];

/// Minimum length, in characters, of a product name and of its category.
pub const MIN_NAME_LEN: usize = 3;

/// Returns [`DEFAULT_CATEGORIES`] as owned strings.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
