//! Home page hero section.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Hero(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Handcrafted Wood, Made to Last"</h1>
            <p>
                "Furniture and lighting shaped from solid oak, walnut, and teak "
                "by a small workshop that still does things by hand."
            </p>
            <button class="button-primary" on:click=move |_| page.set(Page::Shop)>
                "Shop the Collection"
            </button>
        </section>
    }
}
