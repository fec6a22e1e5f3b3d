//! Static product catalog.
//!
//! The catalog is supplied with the app; nothing is fetched or persisted.

use heartwood_commerce::catalog::{Catalog, Product, Specifications};

/// Number of products shown on the home page.
const FEATURED_COUNT: usize = 4;

/// Customization choices offered for configurable products.
pub const WOOD_OPTIONS: [&str; 6] = ["Oak", "Walnut", "Teak", "Mahogany", "Cherry", "Pine"];
pub const FINISH_OPTIONS: [&str; 5] = [
    "Natural",
    "Dark Stain",
    "Matte",
    "High Gloss",
    "Satin",
];
pub const SIZE_OPTIONS: [&str; 3] = ["S", "M", "L"];

/// Filter control values. "All" disables the corresponding predicate.
pub const CATEGORY_CHOICES: [&str; 6] = [
    "All",
    "Lamps",
    "Coffee Tables",
    "Dining Tables",
    "Bedroom Furniture",
    "Consoles & Décor",
];
pub const WOOD_CHOICES: [&str; 7] = [
    "All", "Oak", "Walnut", "Teak", "Mahogany", "Cherry", "Pine",
];

/// Upper bound of the price slider.
pub const MAX_PRICE: f64 = 2000.0;

/// Build the full catalog in display order.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: 1,
            name: "Nordic Pendant Lamp".to_string(),
            price: 299.0,
            original_price: Some(399.0),
            image: "/images/nordic-pendant.jpg".to_string(),
            gallery: vec!["/images/nordic-pendant.jpg".to_string()],
            category: "Lamps".to_string(),
            wood_type: "Oak".to_string(),
            description: "Handcrafted Nordic-style pendant lamp made from premium oak wood."
                .to_string(),
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
        },
        Product {
            id: 2,
            name: "Rustic Table Lamp".to_string(),
            price: 189.0,
            original_price: None,
            image: "/images/rustic-table.jpg".to_string(),
            gallery: vec!["/images/rustic-table.jpg".to_string()],
            category: "Lamps".to_string(),
            wood_type: "Walnut".to_string(),
            description: "Elegant rustic table lamp featuring rich walnut wood base.".to_string(),
            specifications: Specifications {
                dimensions: "8\" W x 16\" H".to_string(),
                weight: "3.2 lbs".to_string(),
                material: "Walnut Wood".to_string(),
                finish: "Dark Stain".to_string(),
            },
            customizable: false,
            in_stock: true,
            rating: 4.6,
            reviews: 18,
        },
        Product {
            id: 3,
            name: "Modern Coffee Table".to_string(),
            price: 799.0,
            original_price: None,
            image: "/images/modern-coffee.jpg".to_string(),
            gallery: vec!["/images/modern-coffee.jpg".to_string()],
            category: "Coffee Tables".to_string(),
            wood_type: "Teak".to_string(),
            description: "Sleek modern coffee table with teak wood construction.".to_string(),
            specifications: Specifications {
                dimensions: "48\" L x 24\" W x 16\" H".to_string(),
                weight: "45 lbs".to_string(),
                material: "Solid Teak".to_string(),
                finish: "Matte Finish".to_string(),
            },
            customizable: false,
            in_stock: true,
            rating: 4.7,
            reviews: 15,
        },
        Product {
            id: 4,
            name: "Executive Dining Table".to_string(),
            price: 1299.0,
            original_price: None,
            image: "/images/executive-dining.jpg".to_string(),
            gallery: vec!["/images/executive-dining.jpg".to_string()],
            category: "Dining Tables".to_string(),
            wood_type: "Mahogany".to_string(),
            description: "Luxurious dining table crafted from solid mahogany wood.".to_string(),
            specifications: Specifications {
                dimensions: "72\" L x 36\" W x 30\" H".to_string(),
                weight: "95 lbs".to_string(),
                material: "Solid Mahogany".to_string(),
                finish: "High Gloss".to_string(),
            },
            customizable: false,
            in_stock: true,
            rating: 4.9,
            reviews: 8,
        },
        Product {
            id: 5,
            name: "Bedroom Nightstand".to_string(),
            price: 299.0,
            original_price: None,
            image: "/images/nightstand.jpg".to_string(),
            gallery: vec!["/images/nightstand.jpg".to_string()],
            category: "Bedroom Furniture".to_string(),
            wood_type: "Cherry".to_string(),
            description: "Elegant cherry wood nightstand with soft-close drawers.".to_string(),
            specifications: Specifications {
                dimensions: "20\" W x 16\" D x 24\" H".to_string(),
                weight: "35 lbs".to_string(),
                material: "Cherry Wood".to_string(),
                finish: "Satin Finish".to_string(),
            },
            customizable: false,
            in_stock: true,
            rating: 4.5,
            reviews: 22,
        },
        Product {
            id: 6,
            name: "Modern Console Table".to_string(),
            price: 599.0,
            original_price: None,
            image: "/images/console.jpg".to_string(),
            gallery: vec!["/images/console.jpg".to_string()],
            category: "Consoles & Décor".to_string(),
            wood_type: "Pine".to_string(),
            description: "Contemporary console table featuring sustainable pine wood.".to_string(),
            specifications: Specifications {
                dimensions: "60\" L x 16\" D x 32\" H".to_string(),
                weight: "55 lbs".to_string(),
                material: "Pine Wood".to_string(),
                finish: "Natural Finish".to_string(),
            },
            customizable: true,
            in_stock: false,
            rating: 4.4,
            reviews: 11,
        },
    ])
}

/// Products highlighted on the home page.
pub fn featured() -> Vec<Product> {
    catalog()
        .products()
        .iter()
        .take(FEATURED_COUNT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = catalog();
        let ids: HashSet<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_featured_is_catalog_subset() {
        let catalog = catalog();
        for product in featured() {
            assert_eq!(catalog.get(product.id), Ok(&product));
        }
    }

    #[test]
    fn test_sale_items_have_higher_original_price() {
        for product in catalog().products() {
            if let Some(original) = product.original_price {
                assert!(original > product.price, "product {} not a real sale", product.id);
            }
        }
    }

    #[test]
    fn test_every_product_within_price_slider() {
        for product in catalog().products() {
            assert!(product.price >= 0.0);
            assert!(product.price <= MAX_PRICE);
        }
    }

    #[test]
    fn test_filter_choices_cover_catalog() {
        for product in catalog().products() {
            assert!(CATEGORY_CHOICES.contains(&product.category.as_str()));
            assert!(WOOD_CHOICES.contains(&product.wood_type.as_str()));
        }
    }
}
