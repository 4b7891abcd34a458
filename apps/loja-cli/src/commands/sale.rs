//! # Sale Commands
//!
//! Sales are recorded as free-form JSON objects; the store adds the id.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreState;
use loja_core::{NewSale, Sale};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSaleResponse {
    /// The stored sale. `None` when a storage failure was absorbed.
    pub sale: Option<Sale>,
}

/// Records a sale from a JSON object such as `{"total": 19.99, "itens": [...]}`.
///
/// A caller-supplied `id` is discarded.
pub async fn save_sale(store: &StoreState, payload: &str) -> Result<SaveSaleResponse, ApiError> {
    debug!(bytes = payload.len(), "save_sale command");

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ApiError::validation(format!("Venda inválida: {e}")))?;
    let candidate = NewSale::try_from(value)?;

    let outcome = store.inner().sales().save_sale(candidate).await?;
    if let Some(cause) = outcome.cause() {
        warn!(error = %cause, "Sale may not have been persisted");
    }

    let sale = outcome.into_value();
    info!(id = ?sale.as_ref().map(|s| s.id), "save_sale complete");
    Ok(SaveSaleResponse { sale })
}

/// Lists every recorded sale.
pub async fn list_sales(store: &StoreState) -> Result<Vec<Sale>, ApiError> {
    debug!("list_sales command");
    Ok(store.inner().sales().list_sales().await?.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use loja_store::{FailurePolicy, Storage};
    use serde_json::json;

    #[tokio::test]
    async fn test_save_and_list() {
        let store = StoreState::new(Storage::in_memory(FailurePolicy::Strict));

        let saved = save_sale(&store, r#"{"id": 7, "total": 19.99, "itens": ["Arroz"]}"#)
            .await
            .unwrap();
        assert_eq!(saved.sale.as_ref().map(|s| s.id), Some(1));

        save_sale(&store, r#"{"total": 2.5}"#).await.unwrap();

        let sales = list_sales(&store).await.unwrap();
        assert_eq!(sales.len(), 2);
        assert_eq!(serde_json::to_value(&sales[0]).unwrap(), json!({"id": 1, "total": 19.99, "itens": ["Arroz"]}));
        assert_eq!(sales[1].id, 2);
    }

    #[tokio::test]
    async fn test_rejects_non_object_payloads() {
        let store = StoreState::new(Storage::in_memory(FailurePolicy::Lenient));

        for payload in ["not json", "[1, 2]", "42"] {
            let err = save_sale(&store, payload).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
            assert!(err.message.starts_with("Venda inválida"));
        }
        assert!(list_sales(&store).await.unwrap().is_empty());
    }
}
