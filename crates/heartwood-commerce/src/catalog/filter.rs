//! Catalog filter types.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A conjunction of optional catalog predicates.
///
/// A product passes iff every *active* predicate is satisfied; an empty
/// filter passes everything. Predicates are pure, so evaluation order is
/// irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Exact wood-type match.
    pub wood_type: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
}

impl CatalogFilter {
    /// Create an empty filter (passes every product).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a wood type.
    pub fn with_wood_type(mut self, wood_type: impl Into<String>) -> Self {
        self.wood_type = Some(wood_type.into());
        self
    }

    /// Restrict to an inclusive price range.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Drop every predicate ("clear all filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any predicate is active.
    pub fn is_active(&self) -> bool {
        self.category.is_some()
            || self.wood_type.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }

    /// Check a product against every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(wood_type) = &self.wood_type {
            if &product.wood_type != wood_type {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}
