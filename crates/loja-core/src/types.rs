//! # Domain Types
//!
//! Records persisted in the device-local store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (int)       │   │  id (int)       │   │  plain String   │       │
//! │  │  nome (unique)  │   │  ...caller      │   │  "Alimentos"    │       │
//! │  │  descricao      │   │     fields      │   │  "Bebidas"      │       │
//! │  │  preco          │   │                 │   │  "Limpeza"      │       │
//! │  │  categoria      │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  "produtos"             "vendas"              "categorias"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are integers assigned at append time as "last element's id + 1"
//! (see [`next_id`]). `nome` is the business key of a product.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Identity
// =============================================================================

/// Records that carry an integer id assigned on append.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Id for the next appended record: last element's id + 1, or 1 when empty.
///
/// Only the tail is consulted. After removals from the middle the sequence
/// keeps growing from whatever the current last element holds.
///
/// ```rust
/// use loja_core::{next_id, Product};
///
/// let empty: Vec<Product> = Vec::new();
/// assert_eq!(next_id(&empty), 1);
/// ```
pub fn next_id<T: Identified>(items: &[T]) -> i64 {
    items
        .last()
        .map_or(1, |last| last.id().saturating_add(1))
}

// =============================================================================
// Product
// =============================================================================

/// A registered product, as stored under `produtos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Integer id assigned at registration.
    #[ts(type = "number")]
    pub id: i64,

    /// Unique business name.
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: String,

    /// Unit price.
    #[serde(rename = "preco")]
    pub price: Money,

    /// Category label.
    #[serde(rename = "categoria")]
    pub category: String,
}

impl Identified for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A product candidate that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: Money,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl NewProduct {
    /// Creates a new candidate.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        NewProduct {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }

    /// Attaches the assigned id.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale, as stored under `vendas`.
///
/// Besides `id`, a sale holds whatever the caller supplied (amount, items,
/// etc.). Those fields are kept verbatim and in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Identified for Sale {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Caller-supplied sale fields awaiting an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSale {
    fields: Map<String, Value>,
}

impl NewSale {
    /// Wraps caller fields. Any `id` key is dropped; the repository assigns it.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        NewSale { fields }
    }

    /// Caller fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Attaches the assigned id.
    pub fn with_id(self, id: i64) -> Sale {
        Sale {
            id,
            fields: self.fields,
        }
    }
}

impl TryFrom<Value> for NewSale {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(NewSale::new(fields)),
            other => Err(ValidationError::InvalidSale {
                reason: format!("esperado um objeto JSON, recebido {other}"),
            }),
        }
    }
}

// =============================================================================
// Registration Form
// =============================================================================

/// Raw text fields of the registration screen.
///
/// Nothing is trimmed or normalised; validation sees exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub nome: String,
    pub descricao: String,
    pub preco: String,
    pub categoria: String,
}

impl ProductForm {
    /// Resets every field to empty (after a successful registration).
    pub fn clear(&mut self) {
        *self = ProductForm::default();
    }

    /// True when no field has content.
    pub fn is_blank(&self) -> bool {
        self.nome.is_empty()
            && self.descricao.is_empty()
            && self.preco.is_empty()
            && self.categoria.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arroz() -> NewProduct {
        NewProduct::new("Arroz", "Tipo 1, 5kg", Money::from_cents(1999), "Alimentos")
    }

    #[test]
    fn test_product_uses_portuguese_keys() {
        let product = arroz().with_id(1);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "nome": "Arroz",
                "descricao": "Tipo 1, 5kg",
                "preco": 19.99,
                "categoria": "Alimentos"
            })
        );
    }

    #[test]
    fn test_next_id_follows_tail() {
        let empty: Vec<Product> = Vec::new();
        assert_eq!(next_id(&empty), 1);

        let products = vec![arroz().with_id(1), arroz().with_id(7), arroz().with_id(3)];
        assert_eq!(next_id(&products), 4);
    }

    #[test]
    fn test_sale_keeps_caller_fields() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 2,
            "total": 39.98,
            "itens": ["Arroz", "Arroz"]
        }))
        .unwrap();

        assert_eq!(sale.id, 2);
        assert_eq!(sale.fields.len(), 2);
        assert_eq!(sale.fields["total"], json!(39.98));

        let back = serde_json::to_value(&sale).unwrap();
        assert_eq!(back["id"], json!(2));
        assert_eq!(back["itens"], json!(["Arroz", "Arroz"]));
    }

    #[test]
    fn test_new_sale_drops_caller_id() {
        let new_sale = NewSale::try_from(json!({"id": 99, "total": 10})).unwrap();
        assert!(!new_sale.fields().contains_key("id"));

        let sale = new_sale.with_id(1);
        assert_eq!(serde_json::to_value(&sale).unwrap(), json!({"id": 1, "total": 10}));
    }

    #[test]
    fn test_new_sale_requires_object() {
        assert!(NewSale::try_from(json!([1, 2])).is_err());
        assert!(NewSale::try_from(json!("venda")).is_err());
    }

    #[test]
    fn test_form_clear() {
        let mut form = ProductForm {
            nome: "Arroz".to_string(),
            descricao: "x".to_string(),
            preco: "1".to_string(),
            categoria: "Alimentos".to_string(),
        };
        assert!(!form.is_blank());
        form.clear();
        assert!(form.is_blank());
    }
}
