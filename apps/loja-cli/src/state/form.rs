//! # Form State
//!
//! The registration form being filled in.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registration Form                                    │
//! │                                                                         │
//! │  ┌──────────┐  set_field   ┌──────────┐  register_product  ┌─────────┐ │
//! │  │  Blank   │─────────────►│  Filled  │───────────────────►│ Success │ │
//! │  └──────────┘              └──────────┘                    └────┬────┘ │
//! │       ▲                         │ validation / duplicate         │      │
//! │       │                         ▼ error: fields kept             │      │
//! │       │                    ┌──────────┐                          │      │
//! │       │                    │  Error   │                          │      │
//! │       │                    └──────────┘                          │      │
//! │       └──────────────── clear ───────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use loja_core::ProductForm;

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Nome,
    Descricao,
    Preco,
    Categoria,
}

/// Form state shared by the form commands.
#[derive(Debug, Default)]
pub struct FormState {
    form: Mutex<ProductForm>,
}

impl FormState {
    /// Creates a blank form.
    pub fn new() -> Self {
        FormState::default()
    }

    /// Executes a function with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductForm) -> R,
    {
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&form)
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> ProductForm {
        self.with_form(ProductForm::clone)
    }

    /// Replaces one input, exactly as typed.
    pub fn set(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.with_form_mut(|form| match field {
            FormField::Nome => form.nome = value,
            FormField::Descricao => form.descricao = value,
            FormField::Preco => form.preco = value,
            FormField::Categoria => form.categoria = value,
        });
    }

    pub fn clear(&self) {
        self.with_form_mut(ProductForm::clear);
    }
}
