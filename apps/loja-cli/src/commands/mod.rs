//! # Commands Module
//!
//! Everything the registration screen can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Register, list, find, remove products
//! ├── category.rs  ◄─── Category picker contents
//! ├── sale.rs      ◄─── Record and list sales
//! ├── storage.rs   ◄─── Bootstrap and reset
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! async fn list_products(store: &StoreState, ...)
//!
//! // Needs the store and the form being filled in
//! async fn register_product(store: &StoreState, form: &FormState)
//! ```
//!
//! Commands return serializable values; rendering is the caller's job.

pub mod category;
pub mod config;
pub mod product;
pub mod sale;
pub mod storage;
