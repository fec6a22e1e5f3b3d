//! Storefront domain types and state containers for Heartwood.
//!
//! This crate provides the core model for a furniture & lighting
//! storefront:
//!
//! - **Catalog**: products, specifications, filtering
//! - **Cart**: line items keyed by product + customization, derived totals
//! - **Wishlist**: saved products keyed by id
//!
//! # Example
//!
//! ```rust
//! use heartwood_commerce::prelude::*;
//!
//! # fn product(id: u32) -> Product {
//! #     Product {
//! #         id,
//! #         name: "Nordic Pendant Lamp".into(),
//! #         price: 299.0,
//! #         original_price: None,
//! #         image: String::new(),
//! #         gallery: Vec::new(),
//! #         category: "Lamps".into(),
//! #         wood_type: "Oak".into(),
//! #         description: String::new(),
//! #         specifications: Specifications::default(),
//! #         customizable: true,
//! #         in_stock: true,
//! #         rating: 4.8,
//! #         reviews: 24,
//! #     }
//! # }
//! let mut cart = Cart::new();
//! cart.add(CartLine::new(product(1), 2));
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), 598.0);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod wishlist;

pub use error::CommerceError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;

    // Catalog
    pub use crate::catalog::{format_price, Catalog, CatalogFilter, Product, Specifications};

    // Cart
    pub use crate::cart::{Cart, CartLine, Customization};

    // Wishlist
    pub use crate::wishlist::Wishlist;
}
