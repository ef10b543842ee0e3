//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── ValidationError  - name / price / stock rule violations           │
//! │                                                                         │
//! │  "Not found" is NOT an error: lookups return Option::None              │
//! │                                                                         │
//! │  catalog-cli errors (separate crate)                                   │
//! │  └── CliError         - I/O, config, closed input                      │
//! │                                                                         │
//! │  Flow: ValidationError → CLI flow → "Error: <message>" on stdout       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the variant
//! 3. Each variant maps to exactly one business rule

use thiserror::Error;

use crate::MIN_NAME_LEN;

// =============================================================================
// Validation Error
// =============================================================================

/// A product failed one of its business rules.
///
/// Raised at construction and on every field update. Rules are checked in
/// the order name → price → stock, and only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or, after trimming, shorter than [`MIN_NAME_LEN`].
    #[error("product name must be at least {min} characters long")]
    InvalidName { min: usize },

    /// Price is negative (or not a number).
    #[error("product price cannot be negative (got {price})")]
    InvalidPrice { price: f64 },

    /// Stock is negative.
    #[error("product stock cannot be negative (got {stock})")]
    InvalidStock { stock: i64 },
}

impl ValidationError {
    /// Name rule violation with the crate-wide minimum length.
    pub fn invalid_name() -> Self {
        ValidationError::InvalidName { min: MIN_NAME_LEN }
    }

    /// Name of the field this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidName { .. } => "name",
            ValidationError::InvalidPrice { .. } => "price",
            ValidationError::InvalidStock { .. } => "stock",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;
