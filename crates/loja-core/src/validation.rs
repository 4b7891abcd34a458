//! # Validation Module
//!
//! Registration form rules, checked before any repository call.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Registration Form Checks                           │
//! │                                                                         │
//! │  1. All four fields non-empty ─────────► "Preencha todos os campos"     │
//! │  2. nome, categoria ≥ 3 chars ─────────► "Nome e categoria devem ..."   │
//! │  3. preco matches digits[.d[d]], > 0 ──► "Preço deve ser um número ..." │
//! │  4. categoria is a known category ─────► "Categoria inválida: ..."      │
//! │                                                                         │
//! │  First failing rule wins. Passing all rules yields a NewProduct.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is validated as typed: no trimming, no case folding.
//!
//! ## Usage
//! ```rust
//! use loja_core::validation::validate_product_form;
//! use loja_core::ProductForm;
//!
//! let form = ProductForm {
//!     nome: "Arroz".into(),
//!     descricao: "Tipo 1".into(),
//!     preco: "19.99".into(),
//!     categoria: "Alimentos".into(),
//! };
//! let product = validate_product_form(&form, &[]).unwrap();
//! assert_eq!(product.price.cents(), 1999);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewProduct, ProductForm};
use crate::MIN_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates every field of the registration form.
///
/// ## Arguments
/// * `form` - Raw form input
/// * `categories` - Categories offered by the picker. When empty the
///   category membership rule is skipped (the picker had nothing to offer).
pub fn validate_product_form(
    form: &ProductForm,
    categories: &[String],
) -> ValidationResult<NewProduct> {
    validate_required(form)?;
    validate_min_len("nome", &form.nome)?;
    validate_min_len("categoria", &form.categoria)?;
    let price = validate_price(&form.preco)?;
    validate_category(&form.categoria, categories)?;

    Ok(NewProduct::new(
        form.nome.clone(),
        form.descricao.clone(),
        price,
        form.categoria.clone(),
    ))
}

/// All four fields must be non-empty.
pub fn validate_required(form: &ProductForm) -> ValidationResult<()> {
    let missing: Vec<String> = [
        ("nome", &form.nome),
        ("descricao", &form.descricao),
        ("preco", &form.preco),
        ("categoria", &form.categoria),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field.to_string())
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

/// Field must have at least [`MIN_NAME_LEN`] characters.
///
/// Length is measured in UTF-16 code units, the unit the mobile screen's
/// text inputs report: "Pão" is 3, "😀a" is 3.
pub fn validate_min_len(field: &str, value: &str) -> ValidationResult<()> {
    if value.encode_utf16().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min: MIN_NAME_LEN,
        });
    }
    Ok(())
}

/// Parses the price and requires it to be greater than zero.
///
/// ```rust
/// use loja_core::validation::validate_price;
///
/// assert!(validate_price("0.01").is_ok());
/// assert!(validate_price("0.00").is_err());
/// assert!(validate_price("10,50").is_err());
/// ```
pub fn validate_price(input: &str) -> ValidationResult<Money> {
    let price: Money = input.parse()?;
    if !price.is_positive() {
        return Err(ValidationError::InvalidPrice {
            value: input.to_string(),
        });
    }
    Ok(price)
}

/// Category must be one of the offered categories (exact match).
pub fn validate_category(categoria: &str, categories: &[String]) -> ValidationResult<()> {
    if categories.is_empty() || categories.iter().any(|c| c == categoria) {
        return Ok(());
    }
    Err(ValidationError::UnknownCategory {
        categoria: categoria.to_string(),
        allowed: categories.to_vec(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_categories;

    fn form(nome: &str, descricao: &str, preco: &str, categoria: &str) -> ProductForm {
        ProductForm {
            nome: nome.to_string(),
            descricao: descricao.to_string(),
            preco: preco.to_string(),
            categoria: categoria.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let product =
            validate_product_form(&form("Arroz", "5kg", "19.99", "Alimentos"), &default_categories())
                .unwrap();
        assert_eq!(product.name, "Arroz");
        assert_eq!(product.description, "5kg");
        assert_eq!(product.price.cents(), 1999);
        assert_eq!(product.category, "Alimentos");
    }

    #[test]
    fn test_missing_fields() {
        let err = validate_product_form(&form("Arroz", "", "", "Alimentos"), &[]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["descricao".to_string(), "preco".to_string()]
            }
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // Exact input is validated, so a single space counts as content.
        assert!(validate_required(&form(" ", " ", " ", " ")).is_ok());
    }

    #[test]
    fn test_short_name_and_category() {
        let err = validate_product_form(&form("Sa", "x", "1", "Alimentos"), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { ref field, min: 3 } if field == "nome"));

        let err = validate_product_form(&form("Sal", "x", "1", "Al"), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { ref field, .. } if field == "categoria"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Three characters, four bytes.
        assert!(validate_min_len("nome", "Pão").is_ok());
        assert!(validate_min_len("nome", "Pã").is_err());

        // An emoji is a surrogate pair: two units.
        assert!(validate_min_len("nome", "😀a").is_ok());
        assert!(validate_min_len("nome", "😀").is_err());
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(validate_price("5").unwrap().cents(), 500);
        assert_eq!(validate_price("5.5").unwrap().cents(), 550);
        assert!(validate_price("0").is_err());
        assert!(validate_price("0.0").is_err());
        assert!(validate_price("-1").is_err());
        assert!(validate_price("1.999").is_err());
        assert!(validate_price("abc").is_err());
        assert_eq!(
            validate_price("99999999999999999999").unwrap().cents(),
            9_999_999_999_999_999_999_900
        );
    }

    #[test]
    fn test_unknown_category() {
        let err =
            validate_product_form(&form("Arroz", "x", "1", "Eletrônicos"), &default_categories())
                .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory { .. }));
        assert_eq!(err.to_string(), "Categoria inválida: Eletrônicos");
    }

    #[test]
    fn test_category_check_skipped_without_list() {
        assert!(validate_category("Qualquer", &[]).is_ok());
    }

    #[test]
    fn test_rule_order() {
        // Empty field wins over short name and bad price.
        let err = validate_product_form(&form("A", "", "x", "B"), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields { .. }));

        // Short name wins over bad price.
        let err = validate_product_form(&form("A", "d", "x", "Bebidas"), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
    }
}
