//! # Category Commands

use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Gets the categories offered by the registration picker.
///
/// Before the first `init` this is the built-in default list, read from
/// memory; nothing is written.
pub async fn list_categories(store: &StoreState) -> Result<Vec<String>, ApiError> {
    debug!("list_categories command");
    Ok(store.inner().products().list_categories().await?.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use loja_store::testing::RecordingStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_defaults_before_init() {
        let recording = Arc::new(RecordingStore::new());
        let store = StoreState::with_store(recording.clone(), &ConfigState::default());

        let categories = list_categories(&store).await.unwrap();
        assert_eq!(categories, vec!["Alimentos", "Bebidas", "Limpeza"]);
        assert_eq!(recording.write_count(), 0);
    }
}
