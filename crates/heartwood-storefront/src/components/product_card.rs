//! Product card shared by the shop grid and the featured section.

use heartwood_commerce::catalog::{format_price, Product};
use leptos::prelude::*;

use crate::app::Page;
use crate::stores::use_wishlist;

#[component]
pub fn ProductCard(
    product: Product,
    page: RwSignal<Page>,
    selected: RwSignal<Option<Product>>,
) -> impl IntoView {
    let wishlist = use_wishlist();

    let id = product.id;
    let on_sale = product.is_on_sale();
    let in_stock = product.in_stock;
    let customizable = product.customizable;
    let full_stars = product.full_stars();

    let open_product = {
        let product = product.clone();
        move |_| {
            selected.set(Some(product.clone()));
            page.set(Page::Product);
        }
    };

    // The heart sits inside the clickable card; don't let it navigate.
    let toggle_wishlist = {
        let product = product.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if wishlist.is_in_wishlist(id) {
                wishlist.remove_from_wishlist(id);
            } else {
                wishlist.add_to_wishlist(product.clone());
            }
        }
    };

    view! {
        <div class="product-card" on:click=open_product>
            <div class="product-card-media">
                <img src=product.image.clone() alt=product.name.clone()/>
                {on_sale.then(|| view! { <span class="sale-badge">"Sale"</span> })}
                {(!in_stock).then(|| view! {
                    <div class="stock-overlay">"Out of Stock"</div>
                })}
                <button
                    class="wishlist-button"
                    class=("wishlist-button-active", move || wishlist.is_in_wishlist(id))
                    aria-label="Toggle wishlist"
                    on:click=toggle_wishlist
                >
                    "\u{2665}"
                </button>
            </div>

            <div class="product-card-info">
                <div class="rating-row">
                    <span class="stars">
                        {"\u{2605}".repeat(full_stars as usize)}
                        {"\u{2606}".repeat(5 - full_stars as usize)}
                    </span>
                    <span class="review-count">"(" {product.reviews} ")"</span>
                </div>

                <h3>{product.name.clone()}</h3>
                <p class="product-meta">
                    {product.wood_type.clone()} " Wood \u{2022} " {product.category.clone()}
                </p>

                <div class="price-row">
                    <span class="price">{product.price_display()}</span>
                    {product.original_price.map(|original| view! {
                        <span class="price-original">{format_price(original)}</span>
                    })}
                    {customizable.then(|| view! {
                        <span class="customizable-tag">"Customizable"</span>
                    })}
                </div>
            </div>
        </div>
    }
}
