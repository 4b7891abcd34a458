//! # Test Doubles
//!
//! [`KeyValueStore`] implementations for exercising repositories and
//! commands without a real backend. Enabled for this crate's own tests and
//! for dependents through the `testing` feature.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::kv::{KeyValueStore, MemoryStore};

// =============================================================================
// FailingStore
// =============================================================================

/// A store whose reads and/or writes fail with `Unavailable`.
///
/// Switches can be flipped mid-test to simulate a store that goes away.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    /// Every call fails.
    pub fn unavailable() -> Self {
        let store = FailingStore::default();
        store.set_fail_reads(true);
        store.set_fail_writes(true);
        store
    }

    /// Reads succeed against `entries`; writes fail.
    pub fn read_only<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = FailingStore {
            inner: MemoryStore::with_entries(entries),
            ..FailingStore::default()
        };
        store.set_fail_writes(true);
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, op: &str) -> StoreResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("simulated {op} failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::check(&self.fail_reads, "read")?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        Self::check(&self.fail_writes, "write")?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        Self::check(&self.fail_writes, "write")?;
        self.inner.remove(key).await
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Self::check(&self.fail_reads, "read")?;
        self.inner.keys().await
    }
}

// =============================================================================
// RecordingStore
// =============================================================================

/// An in-memory store that records every key it was asked to write.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    reads: AtomicUsize,
    writes: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        RecordingStore::default()
    }

    /// Starts from `entries`; they do not count as writes.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        RecordingStore {
            inner: MemoryStore::with_entries(entries),
            ..RecordingStore::default()
        }
    }

    /// Keys passed to `set`, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Current raw value under `key`.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.ok().flatten()
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(key.to_string());
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key).await
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys().await
    }
}

// =============================================================================
// YieldingStore
// =============================================================================

/// An in-memory store whose `get` yields to the scheduler after reading.
///
/// Two read-modify-write callers joined on one task both read before
/// either writes, so the second write replaces the first.
#[derive(Debug, Default)]
pub struct YieldingStore {
    inner: MemoryStore,
}

impl YieldingStore {
    pub fn new() -> Self {
        YieldingStore::default()
    }
}

#[async_trait]
impl KeyValueStore for YieldingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self.inner.get(key).await;
        tokio::task::yield_now().await;
        value
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key).await
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys().await
    }
}
