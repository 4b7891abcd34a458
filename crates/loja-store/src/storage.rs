//! # Storage Handle
//!
//! One value that owns the store handle and the failure policy and hands out
//! repositories. Cloning is cheap (an `Arc` and a `Copy` enum).
//!
//! ## Usage
//! ```rust,ignore
//! let storage = Storage::open_sqlite(SqliteConfig::new("loja.db"), FailurePolicy::Lenient).await?;
//! storage.initialize().await?;
//!
//! let products = storage.products().list_products().await?.into_value();
//! ```

use std::sync::Arc;
use tracing::{info, warn};

use crate::bootstrap::{initialize_storage, BootstrapReport};
use crate::codec::{CATEGORIES, PRODUCTS, SALES};
use crate::error::StoreResult;
use crate::kv::{MemoryStore, SharedStore, SqliteConfig, SqliteStore};
use crate::policy::{FailurePolicy, Outcome};
use crate::repository::{ProductRepository, SaleRepository};

/// Store handle plus policy.
#[derive(Clone)]
pub struct Storage {
    store: SharedStore,
    policy: FailurePolicy,
}

impl Storage {
    /// Wraps an existing store with the default (`Lenient`) policy.
    pub fn new(store: SharedStore) -> Self {
        Storage::with_policy(store, FailurePolicy::default())
    }

    pub fn with_policy(store: SharedStore, policy: FailurePolicy) -> Self {
        Storage { store, policy }
    }

    /// Opens (creating if needed) a SQLite-backed store.
    pub async fn open_sqlite(config: SqliteConfig, policy: FailurePolicy) -> StoreResult<Self> {
        let store = SqliteStore::connect(config).await?;
        Ok(Storage::with_policy(Arc::new(store), policy))
    }

    /// A store that lives only as long as the process.
    pub fn in_memory(policy: FailurePolicy) -> Self {
        Storage::with_policy(Arc::new(MemoryStore::new()), policy)
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// The underlying store handle.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.store.clone(), self.policy)
    }

    /// Returns the sale repository.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.store.clone(), self.policy)
    }

    /// Seeds default categories if needed. See [`initialize_storage`].
    pub async fn initialize(&self) -> StoreResult<Outcome<BootstrapReport>> {
        initialize_storage(&*self.store, self.policy).await
    }

    /// Deletes the three collections. Unrelated keys are left alone.
    ///
    /// Not subject to the failure policy: a maintenance action that half
    /// ran is always reported.
    pub async fn reset(&self) -> StoreResult<usize> {
        let present = self.store.keys().await?;
        let mut removed = 0;

        for key in [PRODUCTS.key(), CATEGORIES.key(), SALES.key()] {
            if present.iter().any(|k| k == key) {
                self.store.remove(key).await?;
                removed += 1;
            }
        }

        if removed > 0 {
            warn!(removed, "Collections deleted");
        } else {
            info!("Nothing to reset");
        }
        Ok(removed)
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::KeyValueStore;
    use loja_core::{Money, NewProduct, NewSale};
    use serde_json::json;

    #[tokio::test]
    async fn test_repositories_share_one_store() {
        let storage = Storage::in_memory(FailurePolicy::Strict);
        storage.initialize().await.unwrap();

        storage
            .products()
            .add_product(NewProduct::new("Arroz", "...", Money::from_cents(1999), "Alimentos"))
            .await
            .unwrap();
        storage
            .sales()
            .save_sale(NewSale::try_from(json!({"total": 19.99})).unwrap())
            .await
            .unwrap();

        assert_eq!(
            storage.store().keys().await.unwrap(),
            vec!["categorias", "produtos", "vendas"]
        );
        assert_eq!(storage.products().list_products().await.unwrap().into_value().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_only_touches_collections() {
        let store = Arc::new(MemoryStore::with_entries([
            ("produtos", "[]"),
            ("vendas", "[]"),
            ("preferencias", "{}"),
        ]));
        let storage = Storage::new(store.clone());

        assert_eq!(storage.reset().await.unwrap(), 2);
        assert_eq!(store.keys().await.unwrap(), vec!["preferencias"]);
        assert_eq!(storage.reset().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sqlite_storage_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = SqliteConfig::new(dir.path().join("loja.db"));

        let storage = Storage::open_sqlite(config.clone(), FailurePolicy::Strict).await.unwrap();
        let first = storage.initialize().await.unwrap().into_value();
        assert!(first.categories_seeded);
        storage
            .products()
            .add_product(NewProduct::new("Suco", "Laranja 1L", Money::from_cents(799), "Bebidas"))
            .await
            .unwrap();
        drop(storage);

        let reopened = Storage::open_sqlite(config, FailurePolicy::Strict).await.unwrap();
        assert!(!reopened.initialize().await.unwrap().into_value().categories_seeded);
        let products = reopened.products().list_products().await.unwrap().into_value();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.to_string(), "R$ 7,99");
    }
}
