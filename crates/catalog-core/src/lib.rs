//! # catalog-core: Pure Business Logic for the Product Catalog
//!
//! This crate owns the product catalog: the [`Product`] entity, the rules it
//! must satisfy, and the in-memory [`ProductRepository`] that assigns ids and
//! holds the collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-cli (menu loop)                      │   │
//! │  │    prompts ──► Command match ──► repository call ──► display    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌──────────────┐  ┌──────────────────────┐   │   │
//! │  │   │  product   │  │  validation  │  │  repository          │   │   │
//! │  │   │  Product   │  │  name/price/ │  │  ProductRepository   │   │   │
//! │  │   │  Patch     │  │  stock rules │  │  create/list/get/... │   │   │
//! │  │   └────────────┘  └──────────────┘  └──────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The Product entity and update payloads
//! - [`validation`] - Business rule validation
//! - [`repository`] - In-memory product repository
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{ProductPatch, ProductRepository};
//!
//! let mut repo = ProductRepository::new();
//! let keyboard = repo.create("  Teclado ", 99.9, 10).unwrap();
//! assert_eq!(keyboard.id().get(), 1);
//! assert_eq!(keyboard.name(), "Teclado");
//!
//! let updated = repo
//!     .update(keyboard.id(), ProductPatch::new().price(79.9))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(updated.price(), 79.9);
//!
//! assert!(repo.delete(keyboard.id()));
//! assert!(repo.get_by_id(keyboard.id()).is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;
pub mod repository;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreResult, ValidationError};
pub use product::{NewProduct, Product, ProductId, ProductPatch};
pub use repository::ProductRepository;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a product name, counted in characters after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// First id handed out by a fresh repository.
pub const FIRST_PRODUCT_ID: u64 = 1;
