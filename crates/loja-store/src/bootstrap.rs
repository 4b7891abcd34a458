//! # Storage Bootstrap
//!
//! Run once at startup, before the screen relies on categories being
//! persisted. Safe to run on every start.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     initialize_storage                                  │
//! │                                                                         │
//! │  produtos   empty ───────────────────► info! only, never written        │
//! │                                                                         │
//! │  categorias absent ──┐                                                  │
//! │             []     ──┼───────────────► write the three defaults         │
//! │             malformed (Lenient) ──┘                                     │
//! │             non-empty ───────────────► nothing                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::codec::{CATEGORIES, PRODUCTS};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::policy::{FailurePolicy, Outcome};
use loja_core::default_categories;

/// What a bootstrap run found and did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// No product is registered yet.
    pub products_empty: bool,
    /// The default categories were written by this run.
    pub categories_seeded: bool,
}

/// Seeds the default categories when none are persisted.
///
/// Under `Lenient` a failure yields `Recovered` with a default (all-false)
/// report; under `Strict` it is returned.
pub async fn initialize_storage(
    store: &dyn KeyValueStore,
    policy: FailurePolicy,
) -> StoreResult<Outcome<BootstrapReport>> {
    info!(%policy, "Initializing storage");
    let result = run(store, policy).await;
    policy.settle("initialize_storage", result, BootstrapReport::default)
}

async fn run(store: &dyn KeyValueStore, policy: FailurePolicy) -> StoreResult<BootstrapReport> {
    let products_empty = match PRODUCTS.load(store).await {
        Ok(products) => products.is_empty(),
        Err(e) if e.is_parse() && policy.is_lenient() => {
            warn!(error = %e, "Product collection unreadable, treating as empty");
            true
        }
        Err(e) => return Err(e),
    };

    if products_empty {
        info!("No products registered yet");
    }

    let needs_seed = match CATEGORIES.load_present(store).await {
        Ok(Some(categories)) => categories.is_empty(),
        Ok(None) => true,
        Err(e) if e.is_parse() && policy.is_lenient() => {
            warn!(error = %e, "Category collection unreadable, reseeding");
            true
        }
        Err(e) => return Err(e),
    };

    if needs_seed {
        let defaults = default_categories();
        CATEGORIES.save(store, &defaults).await?;
        info!(categories = ?defaults, "Default categories seeded");
    } else {
        debug!("Categories already present");
    }

    Ok(BootstrapReport {
        products_empty,
        categories_seeded: needs_seed,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::repository::ProductRepository;
    use crate::testing::{FailingStore, RecordingStore};
    use loja_core::DEFAULT_CATEGORIES;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fresh_store_gets_defaults() {
        let store = RecordingStore::new();

        let report = initialize_storage(&store, FailurePolicy::Lenient)
            .await
            .unwrap()
            .into_value();

        assert_eq!(
            report,
            BootstrapReport {
                products_empty: true,
                categories_seeded: true
            }
        );
        assert_eq!(store.writes(), vec!["categorias"]);
        assert_eq!(
            store.raw("categorias").await.as_deref(),
            Some(r#"["Alimentos","Bebidas","Limpeza"]"#)
        );
        // Products are only reported, never written.
        assert_eq!(store.raw("produtos").await, None);
    }

    #[tokio::test]
    async fn test_second_run_writes_nothing() {
        let store = RecordingStore::new();
        initialize_storage(&store, FailurePolicy::Lenient).await.unwrap();
        assert_eq!(store.write_count(), 1);

        let second = initialize_storage(&store, FailurePolicy::Lenient)
            .await
            .unwrap()
            .into_value();
        assert!(!second.categories_seeded);
        assert_eq!(store.write_count(), 1);

        let store = Arc::new(store);
        let repo = ProductRepository::new(store, FailurePolicy::Lenient);
        assert_eq!(
            repo.list_categories().await.unwrap().into_value(),
            DEFAULT_CATEGORIES.to_vec()
        );
    }

    #[tokio::test]
    async fn test_existing_categories_untouched() {
        let store = RecordingStore::with_entries([
            ("categorias", r#"["Padaria"]"#),
            (
                "produtos",
                r#"[{"id":1,"nome":"Pão","descricao":"Francês","preco":0.5,"categoria":"Padaria"}]"#,
            ),
        ]);

        let report = initialize_storage(&store, FailurePolicy::Strict)
            .await
            .unwrap()
            .into_value();

        assert_eq!(report, BootstrapReport::default());
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.raw("categorias").await.as_deref(), Some(r#"["Padaria"]"#));
    }

    #[tokio::test]
    async fn test_empty_category_list_is_reseeded() {
        let store = RecordingStore::with_entries([("categorias", "[]")]);
        let report = initialize_storage(&store, FailurePolicy::Lenient)
            .await
            .unwrap()
            .into_value();
        assert!(report.categories_seeded);
        assert_eq!(store.writes(), vec!["categorias"]);
    }

    #[tokio::test]
    async fn test_malformed_documents() {
        let store = RecordingStore::with_entries([("categorias", "???"), ("produtos", "???")]);
        let outcome = initialize_storage(&store, FailurePolicy::Lenient).await.unwrap();
        assert!(!outcome.is_recovered());
        assert!(outcome.value().categories_seeded);
        assert!(outcome.value().products_empty);
        assert_eq!(store.raw("produtos").await.as_deref(), Some("???"));

        let store = RecordingStore::with_entries([("categorias", "???")]);
        let err = initialize_storage(&store, FailurePolicy::Strict)
            .await
            .unwrap_err();
        assert!(err.is_parse());
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let lenient = initialize_storage(&FailingStore::unavailable(), FailurePolicy::Lenient)
            .await
            .unwrap();
        assert!(lenient.is_recovered());
        assert_eq!(*lenient.value(), BootstrapReport::default());

        let err = initialize_storage(&FailingStore::unavailable(), FailurePolicy::Strict)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
