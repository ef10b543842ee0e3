//! # Validation Module
//!
//! The three product rules, as pure functions.
//!
//! ## Where The Rules Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new(id, name, price, stock)                                  │
//! │  ├── validate_product_name  (1st)                                      │
//! │  ├── validate_price         (2nd)                                      │
//! │  └── validate_stock         (3rd)  → first failure wins                │
//! │                                                                         │
//! │  Product::set_name / set_price / set_stock                             │
//! │  └── same function for the single field being changed                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_price, validate_product_name};
//!
//! assert_eq!(validate_product_name("  Mouse ").unwrap(), "Mouse");
//! assert!(validate_price(-0.01).is_err());
//! ```

use crate::error::ValidationError;
use crate::MIN_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Surrounding whitespace is stripped first
/// - Must have at least [`MIN_NAME_LEN`] characters afterwards
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Teclado ").unwrap(), "Teclado");
/// assert!(validate_product_name(" A ").is_err());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::invalid_name());
    }

    Ok(name.to_string())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - NaN is rejected
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price < 0.0 {
        return Err(ValidationError::InvalidPrice { price });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::InvalidStock { stock });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Teclado").unwrap(), "Teclado");
        assert_eq!(validate_product_name("  Mouse\t").unwrap(), "Mouse");
        assert_eq!(validate_product_name("TV").unwrap(), "TV");

        assert_eq!(
            validate_product_name("A"),
            Err(ValidationError::InvalidName { min: 2 })
        );
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(" B  ").is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // Two characters, four bytes
        assert_eq!(validate_product_name("çã").unwrap(), "çã");
        assert!(validate_product_name("ç").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(99.9).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(25).is_ok());

        assert_eq!(
            validate_stock(-1),
            Err(ValidationError::InvalidStock { stock: -1 })
        );
    }
}
