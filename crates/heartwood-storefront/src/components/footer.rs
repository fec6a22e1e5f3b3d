//! Site footer.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Footer(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <strong>"Heartwood"</strong>
                <p>"Handcrafted wooden furniture and lighting."</p>
            </div>
            <nav class="footer-nav">
                <button class="button-link" on:click=move |_| page.set(Page::Shop)>
                    "Shop"
                </button>
                <button class="button-link" on:click=move |_| page.set(Page::About)>
                    "About"
                </button>
                <button class="button-link" on:click=move |_| page.set(Page::Contact)>
                    "Contact"
                </button>
            </nav>
            <p class="footer-note">"\u{00a9} 2025 Heartwood Studio"</p>
        </footer>
    }
}
