//! # Product Commands
//!
//! Registration, listing, lookup and removal of products.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    register_product                                     │
//! │                                                                         │
//! │  FormState snapshot                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product_form ── error ──► VALIDATION_ERROR, form kept,        │
//! │       │                             no repository call                  │
//! │       ▼                                                                 │
//! │  list_categories + validate_category ── error ──► VALIDATION_ERROR      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_product                                                            │
//! │       ├── Err(duplicate) ──► DUPLICATE, "Produto já cadastrado..."      │
//! │       ├── Err(other)     ──► STORAGE_ERROR, "Não foi possível..."       │
//! │       └── Ok(outcome)    ──► clear form, MainMenu,                      │
//! │                              "Produto cadastrado com sucesso!"          │
//! │                              (Recovered outcome: warn! only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ErrorCode};
use crate::state::{FormState, StoreState};
use loja_core::validation::{validate_category, validate_product_form};
use loja_core::Product;
use loja_store::StoreError;

/// Shown after a registration the caller should treat as done.
pub const REGISTERED: &str = "Produto cadastrado com sucesso!";

/// Shown when the store refused the registration for any reason other
/// than a duplicate name.
pub const REGISTER_FAILED: &str = "Não foi possível cadastrar o produto. Verifique sua conexão.";

/// Product DTO (Data Transfer Object) for the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i128,
    /// Formatted for display, e.g. "R$ 19,99".
    pub price_display: String,
    pub category: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            description: p.description,
            price_cents: p.price.cents(),
            price_display: p.price.to_string(),
            category: p.category,
        }
    }
}

/// Where the screen goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Navigation {
    #[serde(rename = "/menu-principal")]
    MainMenu,
}

impl Navigation {
    pub fn route(self) -> &'static str {
        match self {
            Navigation::MainMenu => "/menu-principal",
        }
    }
}

/// Result of a registration the screen reports as successful.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub navigate_to: Navigation,
    /// The stored product. `None` when a storage failure was absorbed and the
    /// product may not have been persisted.
    pub product: Option<ProductDto>,
}

/// Validates the form and registers the product.
///
/// ## Returns
/// - `Ok` with [`REGISTERED`] and [`Navigation::MainMenu`]; the form is cleared
/// - `Err(VALIDATION_ERROR)` with the rule's message; the form is kept
/// - `Err(DUPLICATE)` with the duplicate message; the form is kept
/// - `Err(STORAGE_ERROR)` with [`REGISTER_FAILED`] (strict policy only)
pub async fn register_product(store: &StoreState, form: &FormState) -> Result<RegisterResponse, ApiError> {
    let start = Instant::now();
    let input = form.snapshot();

    debug!(nome = %input.nome, categoria = %input.categoria, "register_product command");

    // Field rules first: nothing touches the store until they pass.
    let candidate = validate_product_form(&input, &[])?;

    let products = store.inner().products();
    let categories = products
        .list_categories()
        .await
        .map_err(register_failure)?
        .into_value();
    validate_category(&candidate.category, &categories)?;

    let outcome = products
        .add_product(candidate)
        .await
        .map_err(register_failure)?;

    if let Some(cause) = outcome.cause() {
        warn!(
            nome = %input.nome,
            error = %cause,
            "Registration reported as successful but the write may not have happened"
        );
    }

    form.clear();
    let product = outcome.into_value().map(ProductDto::from);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = ?product.as_ref().map(|p| p.id),
        "register_product complete"
    );

    Ok(RegisterResponse {
        message: REGISTERED.to_string(),
        navigate_to: Navigation::MainMenu,
        product,
    })
}

fn register_failure(err: StoreError) -> ApiError {
    if err.is_duplicate() {
        return err.into();
    }
    let api: ApiError = err.into();
    ApiError::new(api.code, REGISTER_FAILED)
}

/// Lists products, optionally only those in `categoria`.
pub async fn list_products(store: &StoreState, categoria: Option<&str>) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!(?categoria, "list_products command");

    let products = store.inner().products();
    let listed = match categoria {
        Some(categoria) => products.list_by_category(categoria).await?,
        None => products.list_products().await?,
    };
    let recovered = listed.is_recovered();
    let dtos: Vec<ProductDto> = listed.into_value().into_iter().map(ProductDto::from).collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        recovered,
        "list_products complete"
    );
    Ok(dtos)
}

/// Gets a single product by its exact name.
pub async fn find_product(store: &StoreState, nome: &str) -> Result<ProductDto, ApiError> {
    debug!(nome, "find_product command");
    store
        .inner()
        .products()
        .find_by_name(nome)
        .await?
        .into_value()
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::new(ErrorCode::ValidationError, format!("Produto não encontrado: {nome}")))
}

/// Removes every product named exactly `nome`, returning how many went.
pub async fn remove_product(store: &StoreState, nome: &str) -> Result<usize, ApiError> {
    debug!(nome, "remove_product command");
    let removed = store.inner().products().remove_product(nome).await?;
    if let Some(cause) = removed.cause() {
        warn!(nome, error = %cause, "Removal may not have been persisted");
    }
    Ok(removed.into_value())
}

// =============================================================================
// Unit Tests
// =============================================================================
