//! # Repository Module
//!
//! Collection-level operations the registration screen calls.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Read, Modify, Write Back                             │
//! │                                                                         │
//! │  Command                                                                │
//! │       │                                                                 │
//! │       │  storage.products().add_product(candidate)                      │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── load "produtos"   ── whole array                                   │
//! │  ├── scan / append / filter in memory                                   │
//! │  └── save "produtos"   ── whole array                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FailurePolicy::settle ──► StoreResult<Outcome<T>>                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! There is no lock around the read-modify-write cycle. Two callers that
//! mutate the same collection concurrently both read the same snapshot and
//! the later write wins; the earlier change is lost.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Product registration, listing, removal, categories
//! - [`SaleRepository`] - Append-only sales

pub mod product;
pub mod sale;

pub use product::ProductRepository;
pub use sale::SaleRepository;
