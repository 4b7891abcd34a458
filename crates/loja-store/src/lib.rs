//! # loja-store: Persistence Layer for Product Registration
//!
//! Stores the product, category and sale collections in a device-local
//! key-value store, one JSON document per collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Loja Data Flow                                   │
//! │                                                                         │
//! │  Command (register_product)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   loja-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repositories │    │    Codec      │    │  KeyValue    │  │   │
//! │  │   │               │    │               │    │  Store       │  │   │
//! │  │   │ ProductRepo   │───►│ produtos      │───►│ MemoryStore  │  │   │
//! │  │   │ SaleRepo      │    │ categorias    │    │ SqliteStore  │  │   │
//! │  │   │ bootstrap     │    │ vendas        │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  │           ▼                                                     │   │
//! │  │   FailurePolicy (Lenient | Strict) ──► Outcome<T>               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - Key-value store trait and backends
//! - [`codec`] - JSON collection documents
//! - [`repository`] - Product and sale repositories
//! - [`bootstrap`] - Default category seeding
//! - [`policy`] - Failure policy and operation outcome
//! - [`storage`] - Handle bundling store and policy
//! - [`migrations`] - Embedded SQLite migrations
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loja_store::{FailurePolicy, SqliteConfig, Storage};
//!
//! let storage = Storage::open_sqlite(SqliteConfig::new("loja.db"), FailurePolicy::Lenient).await?;
//! storage.initialize().await?;
//!
//! let categories = storage.products().list_categories().await?.into_value();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bootstrap;
pub mod codec;
pub mod error;
pub mod kv;
pub mod migrations;
pub mod policy;
pub mod repository;
pub mod storage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use bootstrap::{initialize_storage, BootstrapReport};
pub use codec::Collection;
pub use error::{StoreError, StoreResult};
pub use kv::{KeyValueStore, MemoryStore, SharedStore, SqliteConfig, SqliteStore};
pub use policy::{FailurePolicy, Outcome};
pub use storage::Storage;

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
