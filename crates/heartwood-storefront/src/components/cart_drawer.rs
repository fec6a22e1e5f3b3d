//! Slide-over cart drawer.

use heartwood_commerce::catalog::format_price;
use leptos::prelude::*;

use crate::stores::use_cart;

#[component]
pub fn CartDrawer(open: RwSignal<bool>) -> impl IntoView {
    let cart = use_cart();

    view! {
        {move || {
            open.get().then(|| view! {
                <div class="drawer-overlay" on:click=move |_| open.set(false)></div>
                <aside class="cart-drawer">
                    <div class="drawer-header">
                        <h2>"Shopping Cart (" {cart.total_items()} ")"</h2>
                        <button class="icon-button" on:click=move |_| open.set(false)>
                            "\u{2715}"
                        </button>
                    </div>

                    {if cart.is_empty() {
                        view! {
                            <p class="drawer-empty">"Your cart is empty."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <ul class="cart-lines">
                                {cart
                                    .lines()
                                    .into_iter()
                                    .map(|line| {
                                        let id = line.product.id;
                                        let quantity = line.quantity;
                                        let customization = line.customization.clone();
                                        let choice_label = customization.as_ref().map(|c| {
                                            format!("{} / {} / {}", c.wood_type, c.finish, c.size)
                                        });

                                        let decrement = {
                                            let customization = customization.clone();
                                            // Drawer clamps to >= 1; removal is its own button.
                                            move |_| cart.update_quantity(
                                                id,
                                                customization.as_ref(),
                                                quantity.saturating_sub(1).max(1),
                                            )
                                        };
                                        let increment = {
                                            let customization = customization.clone();
                                            move |_| cart.update_quantity(
                                                id,
                                                customization.as_ref(),
                                                quantity + 1,
                                            )
                                        };
                                        let remove = {
                                            let customization = customization.clone();
                                            move |_| cart.remove_from_cart(
                                                id,
                                                customization.as_ref(),
                                            )
                                        };

                                        view! {
                                            <li class="cart-line">
                                                <img src=line.product.image.clone() alt=""/>
                                                <div class="line-info">
                                                    <strong>{line.product.name.clone()}</strong>
                                                    {choice_label.map(|label| view! {
                                                        <p class="line-choices">{label}</p>
                                                    })}
                                                    <div class="quantity-stepper">
                                                        <button on:click=decrement>"\u{2212}"</button>
                                                        <span class="quantity">{quantity}</span>
                                                        <button on:click=increment>"+"</button>
                                                    </div>
                                                </div>
                                                <div class="line-side">
                                                    <span class="price">
                                                        {format_price(line.subtotal())}
                                                    </span>
                                                    <button class="button-link" on:click=remove>
                                                        "Remove"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>

                            <div class="drawer-footer">
                                <div class="drawer-total">
                                    <span>"Total"</span>
                                    <span class="price">{format_price(cart.total_price())}</span>
                                </div>
                                <button
                                    class="button-link"
                                    on:click=move |_| cart.clear_cart()
                                >
                                    "Clear Cart"
                                </button>
                            </div>
                        }
                            .into_any()
                    }}
                </aside>
            })
        }}
    }
}
