//! Reactive cart store handle.

use heartwood_commerce::cart::{Cart, CartLine, Customization};
use leptos::prelude::*;

/// Handle to the session cart.
///
/// Cheap to copy; every clone points at the same underlying state. Reads
/// made inside reactive closures re-run when the cart changes.
#[derive(Clone, Copy)]
pub struct CartStore {
    state: RwSignal<Cart>,
}

impl CartStore {
    fn new() -> Self {
        Self {
            state: RwSignal::new(Cart::new()),
        }
    }

    /// Add a line, accumulating quantity into an existing line with the
    /// same (product id, customization) key.
    pub fn add_to_cart(&self, line: CartLine) {
        self.state.update(|cart| cart.add(line));
    }

    /// Overwrite the quantity of the line with the given composite key.
    /// Callers clamp to >= 1; a missing key is a silent no-op.
    pub fn update_quantity(
        &self,
        id: u32,
        customization: Option<&Customization>,
        quantity: u32,
    ) {
        self.state
            .update(|cart| cart.update_quantity(id, customization, quantity));
    }

    /// Remove the line with the given composite key, if present.
    pub fn remove_from_cart(&self, id: u32, customization: Option<&Customization>) {
        self.state.update(|cart| cart.remove(id, customization));
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.state.update(Cart::clear);
    }

    /// Snapshot of the lines in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.state.with(|cart| cart.lines().to_vec())
    }

    /// Sum of price x quantity, unrounded.
    pub fn total_price(&self) -> f64 {
        self.state.with(Cart::total_price)
    }

    /// Sum of quantities (header badge count).
    pub fn total_items(&self) -> u32 {
        self.state.with(Cart::total_items)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(Cart::is_empty)
    }
}

/// Install the cart store into context. Call once at the app root.
pub fn provide_cart_store() {
    provide_context(CartStore::new());
}

/// Retrieve the cart store from context.
///
/// Panics when called outside a scope that ran [`provide_cart_store`]:
/// accessing the cart before the app root has installed it is a wiring bug,
/// not something to degrade into an empty store.
pub fn use_cart() -> CartStore {
    use_context::<CartStore>()
        .expect("use_cart called outside the cart store provider scope")
}
