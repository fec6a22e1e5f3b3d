//! Site header with navigation and badge counts.

use leptos::prelude::*;

use crate::app::Page;
use crate::stores::{use_cart, use_wishlist};

#[component]
pub fn Header(page: RwSignal<Page>, cart_open: RwSignal<bool>) -> impl IntoView {
    let cart = use_cart();
    let wishlist = use_wishlist();

    let nav_button = move |label: &'static str, target: Page| {
        view! {
            <button
                class="nav-link"
                class=("nav-link-active", move || page.get() == target)
                on:click=move |_| page.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="site-header">
            <button class="brand" on:click=move |_| page.set(Page::Home)>
                "Heartwood"
            </button>

            <nav class="site-nav">
                {nav_button("Home", Page::Home)}
                {nav_button("Shop", Page::Shop)}
                {nav_button("About", Page::About)}
                {nav_button("Contact", Page::Contact)}
            </nav>

            <div class="header-actions">
                <button class="icon-button" aria-label="Wishlist">
                    "\u{2661}"
                    {move || {
                        let count = wishlist.len();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </button>
                <button
                    class="icon-button"
                    aria-label="Cart"
                    on:click=move |_| cart_open.set(true)
                >
                    "\u{1f6d2}"
                    {move || {
                        let count = cart.total_items();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </button>
            </div>
        </header>
    }
}
