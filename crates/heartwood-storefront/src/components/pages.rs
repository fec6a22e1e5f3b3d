//! Static marketing pages.

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"About Heartwood"</h1>
            <p>
                "Heartwood is a small workshop making furniture and lighting from "
                "sustainably sourced hardwoods. Every piece is cut, joined, and "
                "finished by hand, one order at a time."
            </p>
            <p>
                "We work in oak, walnut, teak, mahogany, cherry, and pine, and "
                "most of our larger pieces can be customized to your space."
            </p>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sent.set(true);
    };

    view! {
        <section class="page-copy">
            <h1>"Get in Touch"</h1>
            {move || {
                if sent.get() {
                    view! {
                        <p>"Thanks! We read every message and reply within two business days."</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <form class="contact-form" on:submit=submit>
                            <input
                                type="text"
                                placeholder="Name"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                type="email"
                                placeholder="Email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <textarea
                                placeholder="How can we help?"
                                required
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                            <button type="submit" class="button-primary">"Send"</button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
