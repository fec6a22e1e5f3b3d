//! Context-provided store handles.
//!
//! Each store owns a single process-wide value behind a reactive signal.
//! All mutations go through the handle's operation set and apply atomically
//! within one event dispatch; views read derived state reactively. The
//! `use_*` accessors fail fast when called outside the providing scope,
//! since that is a wiring bug rather than a runtime condition.

mod cart;
mod wishlist;

pub use cart::{provide_cart_store, use_cart, CartStore};
pub use wishlist::{provide_wishlist_store, use_wishlist, WishlistStore};
