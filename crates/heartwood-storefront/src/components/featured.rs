//! Featured products section on the home page.

use heartwood_commerce::catalog::Product;
use leptos::prelude::*;

use crate::app::Page;
use crate::catalog_data;
use crate::components::ProductCard;

#[component]
pub fn FeaturedProducts(
    page: RwSignal<Page>,
    selected: RwSignal<Option<Product>>,
) -> impl IntoView {
    let products = catalog_data::featured();

    view! {
        <section class="featured">
            <h2>"Featured Pieces"</h2>
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! {
                        <ProductCard product=product page=page selected=selected/>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
