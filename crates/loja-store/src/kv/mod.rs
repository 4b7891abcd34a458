//! # Key-Value Store
//!
//! The device-local, string-keyed, string-valued store every collection
//! lives in.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyValueStore (trait)                              │
//! │                get / set / remove / keys, all async                     │
//! │                                                                         │
//! │      ┌────────────────────┐            ┌──────────────────────────┐     │
//! │      │    MemoryStore     │            │       SqliteStore        │     │
//! │      │  RwLock<HashMap>   │            │  kv_store table, WAL     │     │
//! │      │  tests, --memory   │            │  survives restarts       │     │
//! │      └────────────────────┘            └──────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories receive a [`SharedStore`] handle; nothing reaches for a
//! global store.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{SqliteConfig, SqliteStore};

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreResult;

/// Asynchronous string key-value store.
///
/// Every call may suspend the caller and may fail; implementations map
/// their own failures to [`StoreError::Unavailable`](crate::StoreError::Unavailable).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;

    /// Lists every key, sorted.
    async fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Shared handle injected into repositories.
pub type SharedStore = Arc<dyn KeyValueStore>;
