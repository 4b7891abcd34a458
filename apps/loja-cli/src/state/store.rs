//! # Store State
//!
//! Wraps the [`Storage`] handle for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_products(store: &StoreState) -> Result<Vec<ProductDto>, ApiError> {
//!     let products = store.inner().products().list_products().await?.into_value();
//!     Ok(products.into_iter().map(ProductDto::from).collect())
//! }
//! ```

use std::path::PathBuf;
use tracing::info;

use crate::error::ApiError;
use crate::state::ConfigState;
use loja_store::{SharedStore, SqliteConfig, Storage};

/// Wrapper around `Storage` for command state.
#[derive(Debug, Clone)]
pub struct StoreState {
    storage: Storage,
}

impl StoreState {
    pub fn new(storage: Storage) -> Self {
        StoreState { storage }
    }

    /// Wraps an injected store with the configured policy.
    pub fn with_store(store: SharedStore, config: &ConfigState) -> Self {
        StoreState::new(Storage::with_policy(store, config.failure_policy))
    }

    /// Opens the store described by `config`.
    ///
    /// `default_path` is consulted only for a file-backed store without an
    /// explicit path.
    pub async fn open(
        config: &ConfigState,
        default_path: impl FnOnce() -> Result<PathBuf, ApiError>,
    ) -> Result<Self, ApiError> {
        if config.in_memory {
            info!(policy = %config.failure_policy, "Using in-memory store");
            return Ok(StoreState::new(Storage::in_memory(config.failure_policy)));
        }

        let path = match &config.db_path {
            Some(path) => path.clone(),
            None => default_path()?,
        };
        info!(?path, policy = %config.failure_policy, "Database path determined");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::config(format!("Não foi possível criar {}: {}", parent.display(), e))
            })?;
        }

        let storage = Storage::open_sqlite(SqliteConfig::new(path), config.failure_policy).await?;
        Ok(StoreState::new(storage))
    }

    /// Returns a reference to the inner Storage.
    pub fn inner(&self) -> &Storage {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loja_store::FailurePolicy;

    #[tokio::test]
    async fn test_open_in_memory_skips_path() {
        let config = ConfigState::default().with_overrides(None, true, true);
        let state = StoreState::open(&config, || Err(ApiError::internal("no path needed")))
            .await
            .unwrap();
        assert_eq!(state.inner().policy(), FailurePolicy::Strict);
    }

    #[tokio::test]
    async fn test_open_file_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("loja.db");
        let config = ConfigState::default().with_overrides(Some(path.clone()), false, false);

        let state = StoreState::open(&config, || Err(ApiError::internal("unused")))
            .await
            .unwrap();
        state.inner().initialize().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_default_path_used_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("padrao.db");
        let expected = fallback.clone();

        StoreState::open(&ConfigState::default(), move || Ok(fallback))
            .await
            .unwrap();
        assert!(expected.exists());
    }
}
