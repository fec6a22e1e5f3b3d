//! View components.
//!
//! Components contain no business logic: they read derived store state and
//! invoke store operations in response to user events.

mod cart_drawer;
mod featured;
mod footer;
mod header;
mod hero;
mod newsletter;
mod pages;
mod product_card;
mod product_detail;
mod shop;

pub use cart_drawer::CartDrawer;
pub use featured::FeaturedProducts;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use newsletter::NewsletterPopup;
pub use pages::{About, Contact};
pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
pub use shop::Shop;
