//! Product detail page: gallery, variant picker, quantity stepper, and
//! derived pricing.
//!
//! All state lives in a [`DetailState`] behind one signal; the markup
//! below only reads and forwards events. Fetches are re-issued whenever
//! the route identifier changes, with stale resolutions dropped by the
//! state's generation token.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::detail_state::DetailState;
use shopfront_data::ApiClient;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").unwrap_or_default());
    let state = RwSignal::new(DetailState::new());

    // Re-fetch on mount and whenever the identifier changes.
    Effect::new(move |_| {
        let id = id.get();
        if id.is_empty() {
            return;
        }
        let token = state.try_update(|s| s.begin_load()).unwrap_or_default();
        let client = client.clone();
        spawn_local(async move {
            let result = client.get_product(&id).await;
            state.update(|s| s.apply_load(token, result));
        });
    });

    view! {
        <section class="detail-page">
            {move || {
                if state.with(|s| s.is_loading()) {
                    return view! { <p class="muted">"Loading product..."</p> }.into_any();
                }
                let failure = state.with(|s| {
                    if s.has_product() && s.error_message().is_none() {
                        None
                    } else {
                        Some(
                            s.error_message()
                                .unwrap_or_else(|| "Product not found".to_string()),
                        )
                    }
                });
                match failure {
                    Some(message) => view! { <p class="error-text">{message}</p> }.into_any(),
                    None => view! {
                        <div class="detail-grid">
                            <Gallery state=state/>
                            <DetailInfo state=state/>
                        </div>
                    }
                        .into_any(),
                }
            }}
        </section>
    }
}

// ============================================================================
// Gallery
// ============================================================================

#[component]
fn Gallery(state: RwSignal<DetailState>) -> impl IntoView {
    let alt = move || {
        state.with(|s| s.product().map(|p| p.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="gallery">
            <div class="gallery-main">
                {move || match state.with(|s| s.main_image().map(str::to_string)) {
                    Some(src) => view! { <img src=src alt=alt()/> }.into_any(),
                    None => view! { <div class="no-image">"No image"</div> }.into_any(),
                }}
            </div>
            <Show when=move || state.with(|s| !s.images().is_empty())>
                <div class="gallery-thumbs">
                    <For
                        each=move || {
                            state
                                .with(|s| s.images().to_vec())
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(i, src)| (*i, src.clone())
                        children=move |(i, src)| {
                            view! {
                                <button
                                    class="thumb"
                                    class:thumb-active=move || {
                                        state.with(|s| s.selected_image() == i)
                                    }
                                    on:click=move |_| state.update(|s| s.select_image(i))
                                >
                                    <img src=src alt=format!("thumbnail {}", i + 1)/>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

// ============================================================================
// Details, variants, quantity, actions
// ============================================================================

#[component]
fn DetailInfo(state: RwSignal<DetailState>) -> impl IntoView {
    let name =
        move || state.with(|s| s.product().map(|p| p.name.clone()).unwrap_or_default());
    let rating =
        move || state.with(|s| s.product().map(|p| p.rating_display()).unwrap_or_default());
    let sold =
        move || state.with(|s| s.product().map(|p| p.sold_display()).unwrap_or_default());
    let description = move || {
        state.with(|s| s.product().map(|p| p.description_display()).unwrap_or_default())
    };
    let price = move || state.with(|s| s.price_display());
    let list_price = move || state.with(|s| s.list_price_display());
    let stock = move || state.with(|s| s.available_stock());
    let qty = move || state.with(|s| s.qty());
    let gated = move || !state.with(|s| s.can_purchase());

    view! {
        <div class="detail-info">
            <h2>{name}</h2>
            <div class="detail-meta">
                <span>{rating}</span>
                <span class="sep">"|"</span>
                <span>{sold}</span>
            </div>

            <div class="detail-price">
                <span class="price-final">{price}</span>
                {move || {
                    list_price().map(|lp| view! { <span class="price-original">{lp}</span> })
                }}
            </div>

            <p class="detail-description">{description}</p>

            <VariantPicker state=state/>

            <div class="qty-row">
                <div class="qty-stepper">
                    <button
                        disabled=move || qty() <= 1
                        on:click=move |_| state.update(|s| s.request_qty(s.qty() - 1))
                    >
                        "-"
                    </button>
                    <div class="qty-value">{qty}</div>
                    <button
                        disabled=move || qty() >= stock()
                        on:click=move |_| state.update(|s| s.request_qty(s.qty() + 1))
                    >
                        "+"
                    </button>
                </div>
                <div class="stock-note">{move || format!("{} pieces available", stock())}</div>
            </div>

            <div class="action-row">
                <button
                    class="btn btn-outline"
                    disabled=gated
                    on:click=move |_| logging::log!("Add to cart: {} x {}", qty(), name())
                >
                    "Add to cart"
                </button>
                <button
                    class="btn btn-buy"
                    disabled=gated
                    on:click=move |_| logging::log!("Buy now: {} x {}", qty(), name())
                >
                    "Buy now"
                </button>
            </div>

            <div class="detail-notes">
                <div>"Shipping: Free Ship 0\u{20ab}"</div>
                <div>"Returns: 15-Day Free Returns \u{2022} 100% Authentic"</div>
            </div>
        </div>
    }
}

#[component]
fn VariantPicker(state: RwSignal<DetailState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| !s.variations().is_empty())>
            <div class="variants">
                <div class="variants-label">"Variants"</div>
                <div class="variants-row">
                    <For
                        each=move || {
                            state
                                .with(|s| {
                                    s.variations()
                                        .iter()
                                        .map(|v| v.name.clone())
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(_, name)| name.clone()
                        children=move |(i, name)| {
                            view! {
                                <button
                                    class="variant-btn"
                                    class:variant-active=move || {
                                        state.with(|s| s.selected_variation() == Some(i))
                                    }
                                    on:click=move |_| state.update(|s| s.select_variation(i))
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
