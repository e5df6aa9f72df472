//! Catalog card: one product summary with add-to-cart and navigation.

use leptos::prelude::*;
use shopfront_commerce::catalog::ProductSummary;

/// A single product card.
///
/// Clicking the card body raises `on_navigate` with the product identifier;
/// the add-to-cart button stops propagation so it never also navigates.
#[component]
pub fn ProductCard(
    product: ProductSummary,
    #[prop(into)] on_add_to_cart: Callback<ProductSummary>,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    let id = product.product_id.clone();
    let name = product.name.clone();
    let alt = product.name.clone();
    let image = product.primary_image().map(str::to_string);
    let price = product.final_price_display();
    let original = product.is_on_sale().then(|| product.list_price_display());

    view! {
        <div class="product-card">
            <div class="card-body" on:click=move |_| on_navigate.run(id.clone())>
                <div class="card-image">
                    {match image {
                        Some(src) => view! { <img src=src alt=alt/> }.into_any(),
                        None => view! { <div class="no-image">"No image"</div> }.into_any(),
                    }}
                </div>
                <div class="card-info">
                    <h3>{name}</h3>
                    <Stars/>
                    <p class="price">
                        {price}
                        {original.map(|o| view! { <span class="price-original">{o}</span> })}
                    </p>
                </div>
            </div>
            <button
                class="btn btn-add"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_add_to_cart.run(product.clone());
                }
            >
                "Add to Cart"
            </button>
        </div>
    }
}

/// Star rating placeholder; the review service is an external collaborator.
#[component]
fn Stars() -> impl IntoView {
    view! { <div class="stars" aria-hidden="true">"\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}"</div> }
}
