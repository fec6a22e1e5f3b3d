//! Product data model.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Catalog records are immutable once supplied; the state containers only
/// ever hold copies of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Current price in dollars.
    pub price: f64,
    /// Pre-discount price, present only when the item is on sale.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Primary image reference.
    pub image: String,
    /// Ordered gallery image references.
    pub gallery: Vec<String>,
    /// Category (e.g., "Lamps", "Dining Tables").
    pub category: String,
    /// Wood species (e.g., "Oak", "Walnut").
    pub wood_type: String,
    /// Marketing description.
    pub description: String,
    /// Structured attributes, opaque to the state containers.
    pub specifications: Specifications,
    /// Whether the product accepts customization choices.
    pub customizable: bool,
    /// Availability flag.
    pub in_stock: bool,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Review count.
    pub reviews: u32,
}

impl Product {
    /// Check if the product is on sale.
    ///
    /// The catalog convention is `original_price > price`; a stale record
    /// where that does not hold is not treated as a sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.map(|op| op > self.price).unwrap_or(false)
    }

    /// Dollar amount saved versus the original price, if on sale.
    pub fn savings(&self) -> Option<f64> {
        self.original_price
            .filter(|op| *op > self.price)
            .map(|op| op - self.price)
    }

    /// Format the price for display (e.g., "$299.00").
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    /// Full rating stars, for a five-star display.
    pub fn full_stars(&self) -> u32 {
        self.rating.floor().clamp(0.0, 5.0) as u32
    }
}

/// Structured product attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specifications {
    pub dimensions: String,
    pub weight: String,
    pub material: String,
    pub finish: String,
}

/// Format a dollar amount for display.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product {
            id: 1,
            name: "Nordic Pendant Lamp".to_string(),
            price: 299.0,
            original_price: Some(399.0),
            image: "lamp.png".to_string(),
            gallery: vec!["lamp.png".to_string()],
            category: "Lamps".to_string(),
            wood_type: "Oak".to_string(),
            description: "Handcrafted pendant lamp.".to_string(),
            specifications: Specifications {
                dimensions: "12\" W x 8\" H".to_string(),
                weight: "2.5 lbs".to_string(),
                material: "Premium Oak Wood".to_string(),
                finish: "Natural Oil Finish".to_string(),
            },
            customizable: false,
            in_stock: true,
            rating: 4.8,
            reviews: 24,
        }
    }

    #[test]
    fn test_on_sale() {
        let product = lamp();
        assert!(product.is_on_sale());
        assert_eq!(product.savings(), Some(100.0));
    }

    #[test]
    fn test_not_on_sale_without_original_price() {
        let mut product = lamp();
        product.original_price = None;
        assert!(!product.is_on_sale());
        assert_eq!(product.savings(), None);
    }

    #[test]
    fn test_not_on_sale_when_original_price_lower() {
        let mut product = lamp();
        product.original_price = Some(250.0);
        assert!(!product.is_on_sale());
        assert_eq!(product.savings(), None);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(lamp().price_display(), "$299.00");
        assert_eq!(format_price(19.5), "$19.50");
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(lamp().full_stars(), 4);
        let mut product = lamp();
        product.rating = 5.0;
        assert_eq!(product.full_stars(), 5);
    }
}
