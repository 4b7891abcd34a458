//! # Storage Commands
//!
//! Startup bootstrap and maintenance.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreState;
use loja_store::BootstrapReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub products_empty: bool,
    pub categories_seeded: bool,
    /// A storage failure was absorbed; the flags above are defaults.
    pub recovered: bool,
}

/// Seeds the default categories when none are stored.
///
/// Run once when the screen opens. Running it again is harmless.
pub async fn initialize_storage(store: &StoreState) -> Result<InitResponse, ApiError> {
    debug!("initialize_storage command");
    let outcome = store.inner().initialize().await?;
    let recovered = outcome.is_recovered();
    if recovered {
        warn!("Storage bootstrap did not complete");
    }

    let BootstrapReport {
        products_empty,
        categories_seeded,
    } = outcome.into_value();

    info!(products_empty, categories_seeded, "initialize_storage complete");
    Ok(InitResponse {
        products_empty,
        categories_seeded,
        recovered,
    })
}

/// Deletes the product, category and sale collections.
pub async fn reset_storage(store: &StoreState) -> Result<usize, ApiError> {
    debug!("reset_storage command");
    Ok(store.inner().reset().await?)
}
