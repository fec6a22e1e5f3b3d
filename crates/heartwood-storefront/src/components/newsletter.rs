//! Newsletter signup popup.
//!
//! Opened by a one-shot timer owned by the app shell; closes on dismiss,
//! or shortly after a successful signup.

use std::time::Duration;

use leptos::prelude::*;

/// How long the thank-you state stays visible before self-closing.
const CONFIRMATION_LINGER: Duration = Duration::from_millis(2500);

#[component]
pub fn NewsletterPopup(open: RwSignal<bool>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        subscribed.set(true);
        set_timeout(move || open.set(false), CONFIRMATION_LINGER);
    };

    view! {
        {move || {
            open.get().then(|| view! {
                <div class="popup-overlay" on:click=move |_| open.set(false)></div>
                <div class="popup">
                    <button class="icon-button popup-close" on:click=move |_| open.set(false)>
                        "\u{2715}"
                    </button>

                    {if subscribed.get() {
                        view! {
                            <h2>"Thanks for joining!"</h2>
                            <p>"Workshop news and early access are on their way."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <h2>"From Our Workshop to Your Inbox"</h2>
                            <p>"New pieces, wood care tips, and subscriber-only offers."</p>
                            <form on:submit=submit>
                                <input
                                    type="email"
                                    placeholder="you@example.com"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button type="submit" class="button-primary">
                                    "Subscribe"
                                </button>
                            </form>
                        }
                            .into_any()
                    }}
                </div>
            })
        }}
    }
}
