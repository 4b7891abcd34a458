//! # Product Repository
//!
//! Operations over the `produtos` collection, plus reading `categorias`.
//!
//! ## Key Operations
//! - Registration with a `nome` uniqueness check
//! - Listing, lookup by name, filtering by category
//! - Removal of every product with a given name
//!
//! ## Registration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_product("Arroz")                                 │
//! │                                                                         │
//! │  load produtos ──► [{id:1,"Feijão"}, {id:4,"Café"}]                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  any nome == "Arroz"? ── yes ──► Err(DuplicateProduct), no write        │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  id = last.id + 1 = 5                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save produtos ──► [{id:1,...}, {id:4,...}, {id:5,"Arroz"}]             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Name comparisons are exact: case-sensitive, no trimming.

use tracing::{debug, warn};

use crate::codec::{CATEGORIES, PRODUCTS};
use crate::error::StoreResult;
use crate::kv::SharedStore;
use crate::policy::{FailurePolicy, Outcome};
use loja_core::{default_categories, next_id, CoreError, NewProduct, Product};

/// Repository for the `produtos` collection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(store, FailurePolicy::Lenient);
///
/// let outcome = repo.add_product(candidate).await?;
/// let products = repo.list_products().await?.into_value();
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    store: SharedStore,
    policy: FailurePolicy,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: SharedStore, policy: FailurePolicy) -> Self {
        ProductRepository { store, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Registers a product, assigning the next id.
    ///
    /// ## Returns
    /// - `Ok(Complete(Some(product)))` when written
    /// - `Err(Rejected(DuplicateProduct))` when `nome` is taken; nothing written
    /// - `Ok(Recovered { value: None, .. })` when the store failed under
    ///   `Lenient`; the product may not have been persisted
    ///
    /// A `produtos` document that cannot be parsed aborts the write rather
    /// than being replaced by a one-element list.
    pub async fn add_product(&self, candidate: NewProduct) -> StoreResult<Outcome<Option<Product>>> {
        debug!(nome = %candidate.name, categoria = %candidate.category, "Adding product");

        let result = self.insert(candidate).await.map(Some);
        self.policy.settle("add_product", result, || None)
    }

    async fn insert(&self, candidate: NewProduct) -> StoreResult<Product> {
        let mut products = PRODUCTS.load(&*self.store).await?;

        if products.iter().any(|p| p.name == candidate.name) {
            warn!(nome = %candidate.name, "Product name already registered");
            return Err(CoreError::DuplicateProduct {
                nome: candidate.name,
            }
            .into());
        }

        let product = candidate.with_id(next_id(&products));
        products.push(product.clone());
        PRODUCTS.save(&*self.store, &products).await?;

        debug!(id = product.id, nome = %product.name, "Product registered");
        Ok(product)
    }

    /// Lists every product in insertion order. Falls back to `[]`.
    pub async fn list_products(&self) -> StoreResult<Outcome<Vec<Product>>> {
        debug!("Listing products");
        let result = PRODUCTS.load(&*self.store).await;
        self.policy.settle("list_products", result, Vec::new)
    }

    /// Lists categories.
    ///
    /// When `categorias` was never written the three defaults are returned
    /// without being persisted; seeding is [`initialize_storage`]'s job.
    /// A stored empty list is returned as is. Falls back to `[]`.
    ///
    /// [`initialize_storage`]: crate::bootstrap::initialize_storage
    pub async fn list_categories(&self) -> StoreResult<Outcome<Vec<String>>> {
        debug!("Listing categories");
        let result = CATEGORIES
            .load_present(&*self.store)
            .await
            .map(|stored| stored.unwrap_or_else(default_categories));
        self.policy.settle("list_categories", result, Vec::new)
    }

    /// Removes every product named exactly `nome`, returning how many went.
    ///
    /// The filtered list is written back even when nothing matched.
    pub async fn remove_product(&self, nome: &str) -> StoreResult<Outcome<usize>> {
        debug!(nome, "Removing product");
        let result = self.remove_matching(nome).await;
        self.policy.settle("remove_product", result, || 0)
    }

    async fn remove_matching(&self, nome: &str) -> StoreResult<usize> {
        let mut products = PRODUCTS.load(&*self.store).await?;
        let before = products.len();
        products.retain(|p| p.name != nome);
        let removed = before - products.len();

        PRODUCTS.save(&*self.store, &products).await?;

        debug!(nome, removed, remaining = products.len(), "Products removed");
        Ok(removed)
    }

    /// First product named exactly `nome`. Falls back to `None`.
    pub async fn find_by_name(&self, nome: &str) -> StoreResult<Outcome<Option<Product>>> {
        debug!(nome, "Finding product by name");
        let result = PRODUCTS
            .load(&*self.store)
            .await
            .map(|products| products.into_iter().find(|p| p.name == nome));
        self.policy.settle("find_by_name", result, || None)
    }

    /// Products whose `categoria` equals `categoria` exactly. Falls back to `[]`.
    pub async fn list_by_category(&self, categoria: &str) -> StoreResult<Outcome<Vec<Product>>> {
        debug!(categoria, "Listing products by category");
        let result = PRODUCTS.load(&*self.store).await.map(|products| {
            products
                .into_iter()
                .filter(|p| p.category == categoria)
                .collect()
        });
        self.policy.settle("list_by_category", result, Vec::new)
    }
}

impl std::fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductRepository")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
