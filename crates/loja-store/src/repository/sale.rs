//! # Sale Repository
//!
//! Append-only operations over the `vendas` collection. A sale is whatever
//! the caller recorded (amount, items, payment) plus an assigned id; nothing
//! here interprets those fields.

use tracing::debug;

use crate::codec::SALES;
use crate::error::StoreResult;
use crate::kv::SharedStore;
use crate::policy::{FailurePolicy, Outcome};
use loja_core::{next_id, NewSale, Sale};

/// Repository for the `vendas` collection.
#[derive(Clone)]
pub struct SaleRepository {
    store: SharedStore,
    policy: FailurePolicy,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(store: SharedStore, policy: FailurePolicy) -> Self {
        SaleRepository { store, policy }
    }

    /// Appends a sale with id `last.id + 1` (or 1).
    ///
    /// Under `Lenient` a failed read or write yields
    /// `Recovered { value: None, .. }`.
    pub async fn save_sale(&self, candidate: NewSale) -> StoreResult<Outcome<Option<Sale>>> {
        debug!(fields = candidate.fields().len(), "Saving sale");
        let result = self.append(candidate).await.map(Some);
        self.policy.settle("save_sale", result, || None)
    }

    async fn append(&self, candidate: NewSale) -> StoreResult<Sale> {
        let mut sales = SALES.load(&*self.store).await?;
        let sale = candidate.with_id(next_id(&sales));
        sales.push(sale.clone());
        SALES.save(&*self.store, &sales).await?;

        debug!(id = sale.id, total_sales = sales.len(), "Sale recorded");
        Ok(sale)
    }

    /// Lists every sale in recording order. Falls back to `[]`.
    pub async fn list_sales(&self) -> StoreResult<Outcome<Vec<Sale>>> {
        debug!("Listing sales");
        let result = SALES.load(&*self.store).await;
        self.policy.settle("list_sales", result, Vec::new)
    }
}

impl std::fmt::Debug for SaleRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleRepository")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
