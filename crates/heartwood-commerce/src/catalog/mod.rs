//! Product catalog module.
//!
//! Contains the product data model, the static catalog, and filtering.

mod filter;
mod product;

pub use filter::CatalogFilter;
pub use product::{format_price, Product, Specifications};

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// An ordered, externally supplied sequence of products.
///
/// The catalog is static for the lifetime of a session: nothing is fetched,
/// paginated, or persisted. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: u32) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing every active predicate of the filter, lazily.
    pub fn filter<'a>(
        &'a self,
        filter: &'a CatalogFilter,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
