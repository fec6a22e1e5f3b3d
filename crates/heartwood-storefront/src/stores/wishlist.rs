//! Reactive wishlist store handle.

use heartwood_commerce::catalog::Product;
use heartwood_commerce::wishlist::Wishlist;
use leptos::prelude::*;

/// Handle to the session wishlist.
#[derive(Clone, Copy)]
pub struct WishlistStore {
    state: RwSignal<Wishlist>,
}

impl WishlistStore {
    fn new() -> Self {
        Self {
            state: RwSignal::new(Wishlist::new()),
        }
    }

    /// Save a product. Idempotent for an already-saved id.
    pub fn add_to_wishlist(&self, product: Product) {
        self.state.update(|wishlist| wishlist.add(product));
    }

    /// Remove a saved product, if present.
    pub fn remove_from_wishlist(&self, id: u32) {
        self.state.update(|wishlist| wishlist.remove(id));
    }

    /// Empty the wishlist.
    pub fn clear_wishlist(&self) {
        self.state.update(Wishlist::clear);
    }

    /// Reactive membership test by product id.
    pub fn is_in_wishlist(&self, id: u32) -> bool {
        self.state.with(|wishlist| wishlist.contains(id))
    }

    /// Snapshot of saved products in insertion order.
    pub fn items(&self) -> Vec<Product> {
        self.state.with(|wishlist| wishlist.items().to_vec())
    }

    /// Number of saved products (header badge count).
    pub fn len(&self) -> usize {
        self.state.with(Wishlist::len)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(Wishlist::is_empty)
    }
}

/// Install the wishlist store into context. Call once at the app root.
pub fn provide_wishlist_store() {
    provide_context(WishlistStore::new());
}

/// Retrieve the wishlist store from context.
///
/// Panics when called outside a scope that ran
/// [`provide_wishlist_store`]; see [`crate::stores::use_cart`].
pub fn use_wishlist() -> WishlistStore {
    use_context::<WishlistStore>()
        .expect("use_wishlist called outside the wishlist store provider scope")
}
