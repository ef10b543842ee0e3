//! # Product Entity
//!
//! The catalog item and the payloads used to create and change it.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  id     ProductId (u64)   assigned by the repository, never changes    │
//! │  name   String            trimmed, >= 2 characters                     │
//! │  price  f64               >= 0                                         │
//! │  stock  i64               >= 0, defaults to 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private. The only way to get a `Product` is through
//! [`ProductRepository::create`](crate::ProductRepository::create), and the
//! only way to change one is through the validating setters, which the
//! repository drives from a [`ProductPatch`].

use serde::Serialize;

use crate::error::CoreResult;
use crate::validation::{validate_price, validate_product_name, validate_stock};

// =============================================================================
// Product Id
// =============================================================================

/// Sequential product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw id (e.g. one typed by the user).
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
}

impl Product {
    /// Builds a validated product.
    ///
    /// Rules are checked name → price → stock; the first violation is
    /// returned. Only the repository calls this.
    pub(crate) fn new(id: ProductId, name: &str, price: f64, stock: i64) -> CoreResult<Self> {
        let name = validate_product_name(name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        Ok(Product {
            id,
            name,
            price,
            stock,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Replaces the name after trimming and validating it.
    pub(crate) fn set_name(&mut self, name: &str) -> CoreResult<()> {
        self.name = validate_product_name(name)?;
        Ok(())
    }

    pub(crate) fn set_price(&mut self, price: f64) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    pub(crate) fn set_stock(&mut self, stock: i64) -> CoreResult<()> {
        validate_stock(stock)?;
        self.stock = stock;
        Ok(())
    }

    /// Applies a patch field by field in the order name → price → stock.
    ///
    /// Stops at the first invalid field. Fields applied before it stay
    /// applied.
    pub(crate) fn apply(&mut self, patch: ProductPatch) -> CoreResult<()> {
        if let Some(name) = patch.name {
            self.set_name(&name)?;
        }
        if let Some(price) = patch.price {
            self.set_price(price)?;
        }
        if let Some(stock) = patch.stock {
            self.set_stock(stock)?;
        }
        Ok(())
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl NewProduct {
    /// New product payload with stock defaulting to 0.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            price,
            stock: 0,
        }
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}

/// Optional field replacements for an existing product.
///
/// `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// An empty patch.
    pub fn new() -> Self {
        ProductPatch::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True when no field is set, i.e. applying the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}
