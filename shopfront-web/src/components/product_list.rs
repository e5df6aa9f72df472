//! Catalog grid and pager.
//!
//! Both are pure displays: they render what they are given and raise
//! events upward, never mutating pagination state themselves.

use leptos::prelude::*;
use shopfront_commerce::catalog::ProductSummary;
use shopfront_commerce::pagination::PageInfo;

use crate::components::ProductCard;

/// Responsive grid of product cards plus the pager.
#[component]
pub fn ProductList(
    products: Vec<ProductSummary>,
    page: PageInfo,
    #[prop(into)] on_page_change: Callback<i64>,
    #[prop(into)] on_add_to_cart: Callback<ProductSummary>,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.clone()
                key=|p| p.product_id.clone()
                children=move |p| {
                    view! {
                        <ProductCard
                            product=p
                            on_add_to_cart=on_add_to_cart
                            on_navigate=on_navigate
                        />
                    }
                }
            />
        </div>
        <Pager page=page on_page_change=on_page_change/>
    }
}

/// Page-number controls.
///
/// Renders nothing for a single page. Previous/Next are disabled at the
/// respective bounds; every click emits the requested page number.
#[component]
pub fn Pager(page: PageInfo, #[prop(into)] on_page_change: Callback<i64>) -> impl IntoView {
    view! {
        <Show when=move || page.is_multi_page()>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="pager-btn"
                    disabled=page.is_first()
                    on:click=move |_| on_page_change.run(page.current_page - 1)
                >
                    "Previous"
                </button>
                <div class="pager-numbers">
                    {page
                        .pages()
                        .map(|n| {
                            let current = n == page.current_page;
                            view! {
                                <button
                                    class="pager-btn"
                                    class:pager-current=current
                                    on:click=move |_| on_page_change.run(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="pager-btn"
                    disabled=page.is_last()
                    on:click=move |_| on_page_change.run(page.current_page + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
