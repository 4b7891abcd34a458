//! # Collection Codec
//!
//! Each collection is one JSON array stored under one key. Every mutation
//! reads the whole array, changes it in memory and writes the whole array
//! back; there are no partial updates.
//!
//! ```text
//! ┌─────────────┬──────────────────────────────┬───────────────────────────┐
//! │ Key         │ Value                        │ Absent                    │
//! ├─────────────┼──────────────────────────────┼───────────────────────────┤
//! │ produtos    │ [{id,nome,descricao,         │ []                        │
//! │             │   preco,categoria}, ...]     │                           │
//! │ categorias  │ ["Alimentos", ...]           │ [] here; repositories     │
//! │             │                              │ substitute the defaults   │
//! │ vendas      │ [{id, ...caller fields}]     │ []                        │
//! └─────────────┴──────────────────────────────┴───────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::debug;

use loja_core::{Product, Sale};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Products, by `nome`-unique record.
pub const PRODUCTS: Collection<Product> = Collection::new("produtos");

/// Category labels.
pub const CATEGORIES: Collection<String> = Collection::new("categorias");

/// Sales, append-only.
pub const SALES: Collection<Sale> = Collection::new("vendas");

/// A typed JSON array persisted under a single key.
#[derive(Debug)]
pub struct Collection<T> {
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<T> {}

impl<T> Collection<T> {
    /// Declares a collection stored under `key`.
    pub const fn new(key: &'static str) -> Self {
        Collection {
            key,
            _record: PhantomData,
        }
    }

    /// The store key.
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Serializes `records` as a compact JSON array.
    pub fn encode(&self, records: &[T]) -> StoreResult<String> {
        serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: self.key.to_string(),
            source,
        })
    }

    /// Parses a stored document. An absent document is an empty collection.
    pub fn decode(&self, raw: Option<&str>) -> StoreResult<Vec<T>> {
        Ok(self.decode_present(raw)?.unwrap_or_default())
    }

    /// Parses a stored document, keeping "absent" distinct from "empty".
    pub fn decode_present(&self, raw: Option<&str>) -> StoreResult<Option<Vec<T>>> {
        raw.map(|text| {
            serde_json::from_str(text).map_err(|source| StoreError::Parse {
                key: self.key.to_string(),
                source,
            })
        })
        .transpose()
    }

    /// Reads and decodes the whole collection.
    pub async fn load(&self, store: &dyn KeyValueStore) -> StoreResult<Vec<T>> {
        Ok(self.load_present(store).await?.unwrap_or_default())
    }

    /// Reads and decodes the whole collection, `None` when never written.
    pub async fn load_present(&self, store: &dyn KeyValueStore) -> StoreResult<Option<Vec<T>>> {
        let raw = store.get(self.key).await?;
        let records = self.decode_present(raw.as_deref())?;
        debug!(
            key = self.key,
            count = records.as_ref().map(Vec::len),
            "Loaded collection"
        );
        Ok(records)
    }

    /// Encodes and writes the whole collection.
    pub async fn save(&self, store: &dyn KeyValueStore, records: &[T]) -> StoreResult<()> {
        let text = self.encode(records)?;
        store.set(self.key, text).await?;
        debug!(key = self.key, count = records.len(), "Saved collection");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use loja_core::{Money, NewProduct, NewSale};
    use serde_json::json;

    fn products() -> Vec<Product> {
        vec![
            NewProduct::new("Arroz", "5kg", Money::from_cents(1999), "Alimentos").with_id(1),
            NewProduct::new("Sabão", "Pó 1kg", Money::from_cents(850), "Limpeza").with_id(2),
        ]
    }

    #[test]
    fn test_products_round_trip() {
        let list = products();
        let text = PRODUCTS.encode(&list).unwrap();
        assert_eq!(PRODUCTS.decode(Some(&text)).unwrap(), list);

        let empty: Vec<Product> = Vec::new();
        let text = PRODUCTS.encode(&empty).unwrap();
        assert_eq!(text, "[]");
        assert_eq!(PRODUCTS.decode(Some(&text)).unwrap(), empty);
    }

    #[test]
    fn test_sales_round_trip() {
        let sales = vec![
            NewSale::try_from(json!({"total": 39.98, "itens": [{"nome": "Arroz", "qtd": 2}]}))
                .unwrap()
                .with_id(1),
            NewSale::try_from(json!({"total": 8.5, "pagamento": "dinheiro"}))
                .unwrap()
                .with_id(2),
        ];
        let text = SALES.encode(&sales).unwrap();
        assert_eq!(SALES.decode(Some(&text)).unwrap(), sales);
    }

    #[test]
    fn test_absent_is_empty_but_distinct() {
        assert!(PRODUCTS.decode(None).unwrap().is_empty());
        assert!(PRODUCTS.decode_present(None).unwrap().is_none());
        assert_eq!(CATEGORIES.decode_present(Some("[]")).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_malformed_is_parse_error() {
        for raw in ["not json", "{\"id\":1}", "[{\"nome\":\"sem id\"}]", "[1,2]"] {
            let err = PRODUCTS.decode(Some(raw)).unwrap_err();
            assert!(err.is_parse(), "{raw:?} should be a parse error");
        }
    }

    #[test]
    fn test_reads_documents_written_by_the_screen() {
        // Integer ids and a float price exactly as JSON.stringify leaves them.
        let raw = r#"[{"nome":"Arroz","descricao":"...","preco":19.99,"categoria":"Alimentos","id":1}]"#;
        let decoded = PRODUCTS.decode(Some(raw)).unwrap();
        assert_eq!(decoded[0].id, 1);
        assert_eq!(decoded[0].price.cents(), 1999);
    }

    #[tokio::test]
    async fn test_load_and_save() {
        let store = MemoryStore::new();
        assert!(PRODUCTS.load(&store).await.unwrap().is_empty());

        PRODUCTS.save(&store, &products()).await.unwrap();
        assert_eq!(PRODUCTS.load(&store).await.unwrap(), products());
        assert!(store.get("produtos").await.unwrap().is_some());
    }
}
