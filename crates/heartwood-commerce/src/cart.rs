//! Shopping cart state container.
//!
//! Cart lines are addressed by a composite key: product id *plus* the
//! customization selection. A customizable product added twice with
//! different choices yields two independent lines; the same choices
//! accumulate quantity on one line.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A customization selection for a configurable product.
///
/// Fixed-shape record compared structurally; it participates in the cart's
/// composite key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Customization {
    pub wood_type: String,
    pub finish: String,
    pub size: String,
}

impl Customization {
    pub fn new(
        wood_type: impl Into<String>,
        finish: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            wood_type: wood_type.into(),
            finish: finish.into(),
            size: size.into(),
        }
    }
}

/// One entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product being purchased.
    pub product: Product,
    /// Positive quantity. The store does not validate this; callers clamp.
    pub quantity: u32,
    /// Customization selection, absent for stock configurations.
    #[serde(default)]
    pub customization: Option<Customization>,
}

impl CartLine {
    /// Create a line with no customization.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            customization: None,
        }
    }

    /// Attach a customization selection.
    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customization = Some(customization);
        self
    }

    /// Line subtotal (price x quantity), unrounded.
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }

    /// Whether this line is addressed by the given composite key.
    fn keyed_by(&self, id: u32, customization: Option<&Customization>) -> bool {
        self.product.id == id && self.customization.as_ref() == customization
    }
}

/// The cart: an insertion-ordered sequence of lines with derived totals.
///
/// Mutations never fail. Updates and removals against a composite key with
/// no matching line are silent no-ops; the views never branch on whether a
/// mutation "succeeded".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same composite key exists, its quantity is
    /// incremented by the incoming quantity; otherwise the line is appended,
    /// preserving insertion order.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.keyed_by(line.product.id, line.customization.as_ref()))
        {
            existing.quantity += line.quantity;
            return;
        }
        self.lines.push(line);
    }

    /// Overwrite the quantity of the line matching the composite key.
    ///
    /// Silent no-op when no line matches. The store does not clamp;
    /// callers keep quantities >= 1.
    pub fn update_quantity(
        &mut self,
        id: u32,
        customization: Option<&Customization>,
        quantity: u32,
    ) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.keyed_by(id, customization)) {
            line.quantity = quantity;
        }
    }

    /// Remove the line matching the composite key. No-op when absent.
    pub fn remove(&mut self, id: u32, customization: Option<&Customization>) {
        self.lines.retain(|l| !l.keyed_by(id, customization));
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of price x quantity over all lines, unrounded.
    ///
    /// Presentation rounds for display; the store does not.
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines (badge count).
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
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
            price: 299.0,
            original_price: None,
            image: String::new(),
            gallery: Vec::new(),
            category: "Lamps".to_string(),
            wood_type: "Oak".to_string(),
            description: String::new(),
            specifications: Specifications::default(),
            customizable: true,
            in_stock: true,
            rating: 4.5,
            reviews: 12,
        }
    }

    fn oak_natural() -> Customization {
        Customization::new("Oak", "Natural", "M")
    }

    fn walnut_natural() -> Customization {
        Customization::new("Walnut", "Natural", "M")
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_same_key_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));
        cart.add(CartLine::new(product(1), 2).with_customization(oak_natural()));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_different_customizations_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));
        cart.add(CartLine::new(product(1), 1).with_customization(walnut_natural()));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_customized_and_plain_lines_do_not_collide() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1));
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(3), 1));
        cart.add(CartLine::new(product(1), 1));
        cart.add(CartLine::new(product(2), 1));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_quantity_overwrites() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1));
        cart.update_quantity(1, None, 5);

        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_respects_composite_key() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));
        cart.add(CartLine::new(product(1), 1).with_customization(walnut_natural()));

        cart.update_quantity(1, Some(&oak_natural()), 4);

        let quantities: Vec<u32> = cart.lines().iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![4, 1]);
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 2));
        let before = cart.clone();

        cart.update_quantity(99, None, 7);
        cart.update_quantity(1, Some(&oak_natural()), 7);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));
        cart.add(CartLine::new(product(1), 1).with_customization(walnut_natural()));

        cart.remove(1, Some(&oak_natural()));

        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.lines()[0].customization.as_ref(),
            Some(&walnut_natural())
        );
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 2));
        let before = cart.clone();

        cart.remove(99, None);
        cart.remove(1, Some(&oak_natural()));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals_invariant_across_operations() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 2));
        cart.add(CartLine::new(product(2), 1));
        cart.update_quantity(2, None, 3);
        cart.remove(1, None);
        cart.add(CartLine::new(product(3), 4));

        let expected_price: f64 = cart.lines().iter().map(CartLine::subtotal).sum();
        let expected_items: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        assert_eq!(cart.total_price(), expected_price);
        assert_eq!(cart.total_items(), expected_items);
    }

    #[test]
    fn test_clear_is_total() {
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 2));
        cart.add(CartLine::new(product(2), 3));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_line_deserializes_without_customization_field() {
        let mut line = serde_json::to_value(CartLine::new(product(1), 2)).unwrap();
        line.as_object_mut().unwrap().remove("customization");

        let parsed: CartLine = serde_json::from_value(line).unwrap();
        assert_eq!(parsed.customization, None);
        assert_eq!(parsed.quantity, 2);
    }

    #[test]
    fn test_customization_scenario() {
        // Start empty, add id 1 at $299 with Oak/Natural/M.
        let mut cart = Cart::new();
        cart.add(CartLine::new(product(1), 1).with_customization(oak_natural()));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), 299.0);

        // Same key again with quantity 2: one line, summed totals.
        cart.add(CartLine::new(product(1), 2).with_customization(oak_natural()));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 897.0);
        assert_eq!(cart.len(), 1);

        // Different customization: a second line.
        cart.add(CartLine::new(product(1), 1).with_customization(walnut_natural()));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 4);
    }
}
