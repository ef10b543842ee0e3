//! # Product Repository
//!
//! In-memory owner of the product collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ProductRepository                                    │
//! │                                                                         │
//! │  items: Vec<Product>   (insertion order)                               │
//! │  next_id: u64          (starts at 1, only ever increments)             │
//! │                                                                         │
//! │  create(name, price, stock)  ──► id = next_id++ ──► validate ──► push  │
//! │  list_all()                  ──► clone of items                        │
//! │  get_by_id(id)               ──► linear scan → Option<Product>         │
//! │  update(id, patch)           ──► scan → apply name/price/stock         │
//! │  delete(id)                  ──► scan → remove → bool                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! The id is taken from the counter *before* validation, so a rejected
//! `create` still consumes an id. Ids are never handed out twice, including
//! ids of deleted products.
//!
//! ## Ownership
//! There is no global instance. Whoever builds the repository owns it and
//! passes it by reference; mutations need `&mut self`.

use crate::error::CoreResult;
use crate::product::{NewProduct, Product, ProductId, ProductPatch};
use crate::FIRST_PRODUCT_ID;

/// In-memory product store with sequential ids.
///
/// ## Usage
/// ```rust
/// use catalog_core::{ProductId, ProductRepository};
///
/// let mut repo = ProductRepository::new();
/// repo.create("Teclado", 99.9, 10).unwrap();
/// repo.create("Mouse", 59.5, 25).unwrap();
///
/// let names: Vec<_> = repo.list_all().iter().map(|p| p.name().to_string()).collect();
/// assert_eq!(names, ["Teclado", "Mouse"]);
/// assert!(repo.get_by_id(ProductId::new(3)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    items: Vec<Product>,
    next_id: u64,
}

impl Default for ProductRepository {
    fn default() -> Self {
        ProductRepository::new()
    }
}

impl ProductRepository {
    /// Creates an empty repository whose first id is 1.
    pub fn new() -> Self {
        ProductRepository {
            items: Vec::new(),
            next_id: FIRST_PRODUCT_ID,
        }
    }

    fn generate_id(&mut self) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates, validates and stores a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - A copy of the stored product
    /// * `Err(ValidationError)` - First broken rule (name → price → stock);
    ///   nothing is stored but the id is still consumed
    pub fn create(&mut self, name: &str, price: f64, stock: i64) -> CoreResult<Product> {
        let id = self.generate_id();
        let product = Product::new(id, name, price, stock)?;
        self.items.push(product.clone());
        Ok(product)
    }

    /// Same as [`create`](Self::create), taking a [`NewProduct`] payload.
    pub fn create_product(&mut self, payload: NewProduct) -> CoreResult<Product> {
        self.create(&payload.name, payload.price, payload.stock)
    }

    /// Snapshot of every product, in insertion order.
    pub fn list_all(&self) -> Vec<Product> {
        self.items.clone()
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Some(Product)` - Product found
    /// * `None` - Never issued, or already deleted
    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.items.iter().find(|p| p.id() == id).cloned()
    }

    /// Applies a patch to an existing product.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Every supplied field was valid and applied
    /// * `Ok(None)` - No product with that id; nothing changed
    /// * `Err(ValidationError)` - A supplied field was invalid; fields before
    ///   it (in name → price → stock order) remain applied
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> CoreResult<Option<Product>> {
        let Some(product) = self.items.iter_mut().find(|p| p.id() == id) else {
            return Ok(None);
        };

        product.apply(patch)?;
        Ok(Some(product.clone()))
    }

    /// Removes a product.
    ///
    /// Returns `true` if it existed, `false` otherwise.
    pub fn delete(&mut self, id: ProductId) -> bool {
        match self.items.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of products currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the repository holds no products.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `create` call will use.
    pub fn next_id(&self) -> ProductId {
        ProductId::new(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut repo = ProductRepository::new();
        assert_eq!(repo.next_id(), id(1));

        let a = repo.create("Teclado", 99.9, 10).unwrap();
        let b = repo.create("Mouse", 59.5, 25).unwrap();

        assert_eq!(a.id(), id(1));
        assert_eq!(b.id(), id(2));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.next_id(), id(3));
    }

    #[test]
    fn test_create_trims_and_returns_fields() {
        let mut repo = ProductRepository::new();
        let p = repo.create("  Monitor  ", 0.0, 0).unwrap();

        assert_eq!(p.name(), "Monitor");
        assert_eq!(p.price(), 0.0);
        assert_eq!(p.stock(), 0);
        assert_eq!(repo.get_by_id(p.id()), Some(p));
    }

    #[test]
    fn test_create_product_defaults_stock() {
        let mut repo = ProductRepository::new();
        let p = repo.create_product(NewProduct::new("Cabo HDMI", 25.0)).unwrap();
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn test_create_invalid_leaves_collection_unchanged() {
        let mut repo = ProductRepository::new();

        assert_eq!(
            repo.create("A", 10.0, 0).unwrap_err(),
            ValidationError::InvalidName { min: 2 }
        );
        assert_eq!(
            repo.create("Mouse", -1.0, 0).unwrap_err(),
            ValidationError::InvalidPrice { price: -1.0 }
        );
        assert_eq!(
            repo.create("Mouse", 1.0, -1).unwrap_err(),
            ValidationError::InvalidStock { stock: -1 }
        );

        assert!(repo.is_empty());
        assert!(repo.list_all().is_empty());
    }

    #[test]
    fn test_failed_create_still_consumes_id() {
        let mut repo = ProductRepository::new();

        assert!(repo.create("A", 10.0, 0).is_err());
        assert!(repo.is_empty());

        let p = repo.create("Teclado", 99.9, 10).unwrap();
        assert_eq!(p.id(), id(2));
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut repo = ProductRepository::new();
        repo.create("Teclado", 99.9, 10).unwrap();

        let snapshot = repo.list_all();
        repo.create("Mouse", 59.5, 25).unwrap();
        repo.delete(id(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name(), "Teclado");
        assert_eq!(repo.list_all().len(), 1);
        assert_eq!(repo.list_all()[0].name(), "Mouse");
    }

    #[test]
    fn test_list_all_keeps_insertion_order_without_deleted() {
        let mut repo = ProductRepository::new();
        for name in ["Alpha", "Bravo", "Charlie", "Delta"] {
            repo.create(name, 1.0, 1).unwrap();
        }
        assert!(repo.delete(id(2)));

        let names: Vec<_> = repo.list_all().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["Alpha", "Charlie", "Delta"]);
    }

    #[test]
    fn test_get_by_id_missing() {
        let mut repo = ProductRepository::new();
        assert!(repo.get_by_id(id(1)).is_none());

        repo.create("Teclado", 99.9, 10).unwrap();
        assert!(repo.delete(id(1)));
        assert!(repo.get_by_id(id(1)).is_none());
        assert!(repo.get_by_id(id(42)).is_none());
    }

    #[test]
    fn test_update_missing_id_has_no_side_effects() {
        let mut repo = ProductRepository::new();
        repo.create("Teclado", 99.9, 10).unwrap();
        let before = repo.list_all();

        let result = repo.update(id(9), ProductPatch::new().name("Other")).unwrap();
        assert!(result.is_none());
        assert_eq!(repo.list_all(), before);
        assert_eq!(repo.next_id(), id(2));
    }

    #[test]
    fn test_update_empty_patch_returns_unchanged() {
        let mut repo = ProductRepository::new();
        let p = repo.create("Teclado", 99.9, 10).unwrap();

        let updated = repo.update(p.id(), ProductPatch::new()).unwrap();
        assert_eq!(updated, Some(p));
    }

    #[test]
    fn test_update_all_fields() {
        let mut repo = ProductRepository::new();
        let p = repo.create("Teclado", 99.9, 10).unwrap();

        let patch = ProductPatch::new().name(" Teclado RGB ").price(149.0).stock(3);
        let updated = repo.update(p.id(), patch).unwrap().unwrap();

        assert_eq!(updated.id(), p.id());
        assert_eq!(updated.name(), "Teclado RGB");
        assert_eq!(updated.price(), 149.0);
        assert_eq!(updated.stock(), 3);
        assert_eq!(repo.get_by_id(p.id()), Some(updated));
    }

    #[test]
    fn test_update_partial_apply_on_failure() {
        let mut repo = ProductRepository::new();
        let p = repo.create("Teclado", 99.9, 10).unwrap();

        let patch = ProductPatch::new().price(50.0).stock(-4);
        let err = repo.update(p.id(), patch).unwrap_err();
        assert_eq!(err, ValidationError::InvalidStock { stock: -4 });

        let stored = repo.get_by_id(p.id()).unwrap();
        assert_eq!(stored.price(), 50.0);
        assert_eq!(stored.stock(), 10);
    }

    #[test]
    fn test_update_invalid_name_changes_nothing() {
        let mut repo = ProductRepository::new();
        let p = repo.create("Teclado", 99.9, 10).unwrap();

        let patch = ProductPatch::new().name(" ").price(1.0);
        assert!(repo.update(p.id(), patch).is_err());
        assert_eq!(repo.get_by_id(p.id()), Some(p));
    }

    #[test]
    fn test_delete_twice() {
        let mut repo = ProductRepository::new();
        let p = repo.create("Teclado", 99.9, 10).unwrap();

        assert!(repo.delete(p.id()));
        assert!(!repo.delete(p.id()));
        assert!(!repo.delete(id(100)));
    }

    #[test]
    fn test_deleted_id_is_never_reused() {
        let mut repo = ProductRepository::new();
        let a = repo.create("Teclado", 99.9, 10).unwrap();
        repo.delete(a.id());

        let b = repo.create("Teclado", 99.9, 10).unwrap();
        assert_eq!(b.id(), id(2));
    }

    #[test]
    fn test_keyboard_and_mouse_scenario() {
        let mut repo = ProductRepository::new();

        let keyboard = repo.create("Teclado", 99.9, 10).unwrap();
        let mouse = repo.create("Mouse", 59.5, 25).unwrap();
        assert_eq!(keyboard.id(), id(1));
        assert_eq!(mouse.id(), id(2));
        assert_eq!(repo.list_all(), vec![keyboard.clone(), mouse.clone()]);

        let updated = repo
            .update(id(1), ProductPatch::new().price(79.9))
            .unwrap()
            .unwrap();
        assert_eq!(updated.name(), "Teclado");
        assert_eq!(updated.price(), 79.9);
        assert_eq!(updated.stock(), 10);

        assert!(repo.delete(id(2)));
        assert!(repo.get_by_id(id(2)).is_none());
        assert_eq!(repo.list_all(), vec![updated]);
    }
}
