//! Product detail page.

use heartwood_commerce::cart::{CartLine, Customization};
use heartwood_commerce::catalog::{format_price, Product};
use leptos::prelude::*;

use crate::catalog_data::{FINISH_OPTIONS, SIZE_OPTIONS, WOOD_OPTIONS};
use crate::stores::{use_cart, use_wishlist};

#[component]
pub fn ProductDetail(product: Product) -> impl IntoView {
    let cart = use_cart();
    let wishlist = use_wishlist();

    let id = product.id;
    let in_stock = product.in_stock;
    let customizable = product.customizable;
    let gallery = product.gallery.clone();
    let full_stars = product.full_stars();

    let selected_image = RwSignal::new(0usize);
    let quantity = RwSignal::new(1u32);

    // Customization selections; only read when the product is customizable.
    let wood = RwSignal::new(product.wood_type.clone());
    let finish = RwSignal::new(FINISH_OPTIONS[0].to_string());
    let size = RwSignal::new(SIZE_OPTIONS[1].to_string());

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            let mut line = CartLine::new(product.clone(), quantity.get());
            if customizable {
                line = line.with_customization(Customization::new(
                    wood.get(),
                    finish.get(),
                    size.get(),
                ));
            }
            cart.add_to_cart(line);
        }
    };

    let toggle_wishlist = {
        let product = product.clone();
        move |_| {
            if wishlist.is_in_wishlist(id) {
                wishlist.remove_from_wishlist(id);
            } else {
                wishlist.add_to_wishlist(product.clone());
            }
        }
    };

    let main_image = {
        let gallery = gallery.clone();
        let fallback = product.image.clone();
        move || {
            gallery
                .get(selected_image.get())
                .cloned()
                .unwrap_or_else(|| fallback.clone())
        }
    };

    let option_select = move |label: &'static str,
                              signal: RwSignal<String>,
                              options: &'static [&'static str]| {
        view! {
            <label class="filter-control">
                {label}
                <select
                    prop:value=move || signal.get()
                    on:change=move |ev| signal.set(event_target_value(&ev))
                >
                    {options
                        .iter()
                        .map(|choice| view! { <option value=*choice>{*choice}</option> })
                        .collect_view()}
                </select>
            </label>
        }
    };

    view! {
        <section class="product-detail">
            <div class="detail-media">
                <img class="detail-image" src=main_image alt=product.name.clone()/>
                {(gallery.len() > 1).then(|| view! {
                    <div class="thumbnail-row">
                        {gallery
                            .iter()
                            .enumerate()
                            .map(|(index, image)| view! {
                                <button
                                    class="thumbnail"
                                    class=("thumbnail-active", move || selected_image.get() == index)
                                    on:click=move |_| selected_image.set(index)
                                >
                                    <img src=image.clone() alt=""/>
                                </button>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>

            <div class="detail-info">
                <div class="rating-row">
                    <span class="stars">
                        {"\u{2605}".repeat(full_stars as usize)}
                        {"\u{2606}".repeat(5 - full_stars as usize)}
                    </span>
                    <span class="review-count">"(" {product.reviews} " reviews)"</span>
                    <button
                        class="wishlist-button"
                        class=("wishlist-button-active", move || wishlist.is_in_wishlist(id))
                        on:click=toggle_wishlist
                    >
                        "\u{2665}"
                    </button>
                </div>

                <h1>{product.name.clone()}</h1>
                <p class="product-meta">
                    {product.category.clone()} " \u{2022} " {product.wood_type.clone()} " Wood"
                </p>

                <div class="price-row">
                    <span class="price">{product.price_display()}</span>
                    {product.original_price.map(|original| view! {
                        <span class="price-original">{format_price(original)}</span>
                    })}
                    {product.savings().map(|saved| view! {
                        <span class="savings-tag">"Save " {format_price(saved)}</span>
                    })}
                </div>

                <p class="description">{product.description.clone()}</p>

                {customizable.then(|| view! {
                    <div class="customization">
                        <h2>"Customize Your Piece"</h2>
                        {option_select("Wood Type", wood, &WOOD_OPTIONS)}
                        {option_select("Finish", finish, &FINISH_OPTIONS)}
                        {option_select("Size", size, &SIZE_OPTIONS)}
                    </div>
                })}

                <div class="purchase-row">
                    <div class="quantity-stepper">
                        // View-level floor; the store accepts what it is given.
                        <button on:click=move |_| {
                            quantity.update(|q| *q = q.saturating_sub(1).max(1))
                        }>
                            "\u{2212}"
                        </button>
                        <span class="quantity">{move || quantity.get()}</span>
                        <button on:click=move |_| quantity.update(|q| *q += 1)>"+"</button>
                    </div>

                    <button class="button-primary" disabled=!in_stock on:click=add_to_cart>
                        {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                    </button>
                </div>

                <table class="specs">
                    <tbody>
                        <tr>
                            <th>"Dimensions"</th>
                            <td>{product.specifications.dimensions.clone()}</td>
                        </tr>
                        <tr>
                            <th>"Weight"</th>
                            <td>{product.specifications.weight.clone()}</td>
                        </tr>
                        <tr>
                            <th>"Material"</th>
                            <td>{product.specifications.material.clone()}</td>
                        </tr>
                        <tr>
                            <th>"Finish"</th>
                            <td>{product.specifications.finish.clone()}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </section>
    }
}
