//! Wishlist state container.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A set of saved products keyed by id, in insertion order.
///
/// Set semantics: adding a product whose id is already present is a silent
/// no-op, so the wishlist never holds duplicates. Customization choices are
/// not tracked here; the id alone is the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Idempotent: a duplicate id leaves state unchanged.
    pub fn add(&mut self, product: Product) {
        if self.contains(product.id) {
            return;
        }
        self.items.push(product);
    }

    /// Remove the entry with the given id. No-op when absent.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|p| p.id != id);
    }

    /// Empty the wishlist unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Membership test by id.
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Saved products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Specifications;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price: 189.0,
            original_price: None,
            image: String::new(),
            gallery: Vec::new(),
            category: "Lamps".to_string(),
            wood_type: "Walnut".to_string(),
            description: String::new(),
            specifications: Specifications::default(),
            customizable: false,
            in_stock: true,
            rating: 4.6,
            reviews: 18,
        }
    }

    #[test]
    fn test_add_and_membership() {
        let mut wishlist = Wishlist::new();
        assert!(!wishlist.contains(1));

        wishlist.add(product(1));
        assert!(wishlist.contains(1));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(1));
        let once = wishlist.clone();

        wishlist.add(product(1));
        assert_eq!(wishlist, once);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(3));
        wishlist.add(product(1));
        wishlist.add(product(2));
        wishlist.add(product(1));

        let ids: Vec<u32> = wishlist.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(1));
        wishlist.add(product(2));

        wishlist.remove(1);
        assert!(!wishlist.contains(1));
        assert!(wishlist.contains(2));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(1));
        let before = wishlist.clone();

        wishlist.remove(99);
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_clear_is_total() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(1));
        wishlist.add(product(2));

        wishlist.clear();
        assert!(wishlist.is_empty());
        assert!(!wishlist.contains(1));
        assert!(!wishlist.contains(2));
    }
}
