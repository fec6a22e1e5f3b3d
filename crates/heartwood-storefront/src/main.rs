//! Heartwood storefront entry point (client-side rendered).

mod app;
mod catalog_data;
mod components;
mod stores;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
