//! In-process store. Contents vanish with the process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::trace;

use super::KeyValueStore;
use crate::error::StoreResult;

/// Map-backed [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        trace!(key, "memory get");
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        trace!(key, bytes = value.len(), "memory set");
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("produtos").await.unwrap(), None);

        store.set("produtos", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("produtos").await.unwrap().as_deref(), Some("[]"));

        store.set("produtos", "[1]".to_string()).await.unwrap();
        assert_eq!(store.get("produtos").await.unwrap().as_deref(), Some("[1]"));

        store.remove("produtos").await.unwrap();
        store.remove("produtos").await.unwrap();
        assert_eq!(store.get("produtos").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_sorted() {
        let store = MemoryStore::with_entries([("vendas", "[]"), ("categorias", "[]")]);
        assert_eq!(store.keys().await.unwrap(), vec!["categorias", "vendas"]);
    }
}
