//! Catalog page: owns the page signal and the paged list fetch.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::ProductList;
use shopfront_commerce::catalog::ProductSummary;
use shopfront_data::{ApiClient, ProductListPayload};

const PAGE_SIZE: i64 = 12;

#[derive(Clone)]
enum Listing {
    Loading,
    Ready(ProductListPayload),
    Failed(String),
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let page = RwSignal::new(1i64);
    let listing = RwSignal::new(Listing::Loading);
    // Generation token so a superseded page fetch cannot land late.
    let seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let current = page.get();
        let token = seq.with_value(|g| *g) + 1;
        seq.set_value(token);
        listing.set(Listing::Loading);

        let client = client.clone();
        spawn_local(async move {
            let result = client.get_products(current, PAGE_SIZE).await;
            if seq.with_value(|g| *g) != token {
                return;
            }
            listing.set(match result {
                Ok(data) => Listing::Ready(data),
                Err(err) => Listing::Failed(err.to_string()),
            });
        });
    });

    let on_page_change = Callback::new(move |n: i64| page.set(n));
    let on_add_to_cart = Callback::new(move |p: ProductSummary| {
        logging::log!("Added to cart: {} ({})", p.name, p.product_id);
    });
    let on_navigate = Callback::new(move |id: String| {
        navigate(&format!("/product/{}", id), Default::default());
    });

    view! {
        <section class="catalog-page">
            <h2>"All Products"</h2>
            {move || match listing.get() {
                Listing::Loading => view! { <p class="muted">"Loading products..."</p> }.into_any(),
                Listing::Failed(message) => {
                    view! { <p class="error-text">{message}</p> }.into_any()
                }
                Listing::Ready(data) => {
                    view! {
                        <ProductList
                            products=data.products
                            page=data.pagination
                            on_page_change=on_page_change
                            on_add_to_cart=on_add_to_cart
                            on_navigate=on_navigate
                        />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
