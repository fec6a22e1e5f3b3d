//! Shop page: filter controls plus the product grid.

use heartwood_commerce::catalog::{CatalogFilter, Product};
use leptos::prelude::*;

use crate::app::Page;
use crate::catalog_data::{self, CATEGORY_CHOICES, MAX_PRICE, WOOD_CHOICES};
use crate::components::ProductCard;

#[component]
pub fn Shop(page: RwSignal<Page>, selected: RwSignal<Option<Product>>) -> impl IntoView {
    let category = RwSignal::new("All".to_string());
    let wood_type = RwSignal::new("All".to_string());
    let max_price = RwSignal::new(MAX_PRICE);

    let filtered = move || {
        let mut filter = CatalogFilter::new().with_price_range(Some(0.0), Some(max_price.get()));
        let selected_category = category.get();
        if selected_category != "All" {
            filter = filter.with_category(selected_category);
        }
        let selected_wood = wood_type.get();
        if selected_wood != "All" {
            filter = filter.with_wood_type(selected_wood);
        }
        let catalog = catalog_data::catalog();
        let products: Vec<Product> = catalog.filter(&filter).cloned().collect();
        products
    };

    let reset_filters = move |_| {
        category.set("All".to_string());
        wood_type.set("All".to_string());
        max_price.set(MAX_PRICE);
    };

    view! {
        <section class="shop">
            <div class="shop-header">
                <div>
                    <h1>"Shop Collection"</h1>
                    <p>"Discover our handcrafted wooden furniture and lighting"</p>
                </div>

                <div class="shop-filters">
                    <label class="filter-control">
                        "Category"
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {CATEGORY_CHOICES
                                .iter()
                                .map(|choice| view! { <option value=*choice>{*choice}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="filter-control">
                        "Wood"
                        <select
                            prop:value=move || wood_type.get()
                            on:change=move |ev| wood_type.set(event_target_value(&ev))
                        >
                            {WOOD_CHOICES
                                .iter()
                                .map(|choice| view! { <option value=*choice>{*choice}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="filter-control">
                        {move || format!("Up to ${:.0}", max_price.get())}
                        <input
                            type="range"
                            min="0"
                            max=MAX_PRICE
                            step="50"
                            prop:value=move || max_price.get()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    max_price.set(value);
                                }
                            }
                        />
                    </label>
                </div>
            </div>

            {move || {
                let products = filtered();
                if products.is_empty() {
                    view! {
                        <div class="shop-empty">
                            <p>"No products found matching your filters."</p>
                            <button class="button-link" on:click=reset_filters>
                                "Clear all filters"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            {products
                                .into_iter()
                                .map(|product| view! {
                                    <ProductCard product=product page=page selected=selected/>
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
