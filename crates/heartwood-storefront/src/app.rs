//! Application shell: store providers, page navigation, timed popups.

use std::time::Duration;

use heartwood_commerce::catalog::Product;
use leptos::prelude::*;

use crate::components::{
    About, CartDrawer, Contact, FeaturedProducts, Footer, Header, Hero, NewsletterPopup,
    ProductDetail, Shop,
};
use crate::stores::{provide_cart_store, provide_wishlist_store};

/// How long after first render the newsletter popup appears.
const NEWSLETTER_DELAY: Duration = Duration::from_secs(3);

/// Navigation target. The stores never interpret this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Shop,
    Product,
    About,
    Contact,
}

#[component]
pub fn App() -> impl IntoView {
    // Stores live for the whole session; every component below reaches
    // them through context.
    provide_cart_store();
    provide_wishlist_store();

    let page = RwSignal::new(Page::Home);
    let selected_product: RwSignal<Option<Product>> = RwSignal::new(None);
    let cart_open = RwSignal::new(false);
    let newsletter_open = RwSignal::new(false);

    // One-shot prompt; cancelled if the app unmounts first.
    if let Ok(handle) =
        set_timeout_with_handle(move || newsletter_open.set(true), NEWSLETTER_DELAY)
    {
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class="page">
            <Header page=page cart_open=cart_open/>

            <main>
                {move || match page.get() {
                    Page::Home => view! {
                        <Hero page=page/>
                        <FeaturedProducts page=page selected=selected_product/>
                    }
                        .into_any(),
                    Page::Shop => view! {
                        <Shop page=page selected=selected_product/>
                    }
                        .into_any(),
                    Page::Product => selected_product
                        .get()
                        .map(|product| view! { <ProductDetail product=product/> })
                        .into_any(),
                    Page::About => view! { <About/> }.into_any(),
                    Page::Contact => view! { <Contact/> }.into_any(),
                }}
            </main>

            <Footer page=page/>
            <CartDrawer open=cart_open/>
            <NewsletterPopup open=newsletter_open/>
        </div>
    }
}
