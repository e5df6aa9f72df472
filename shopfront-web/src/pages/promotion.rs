//! Promotion builder: local form state with a live preview pane.
//!
//! No network I/O and no persistence; Save and Preview are mock actions
//! (console log plus alert), and the draft is discarded on navigation
//! away. Input constraints (percent bounds, minimum gift quantity) live
//! on the widgets only.

use leptos::logging;
use leptos::prelude::*;

use shopfront_commerce::promotion::{DiscountKind, PromotionDraft, PromotionMode};

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

#[component]
pub fn PromotionPage() -> impl IntoView {
    let draft = RwSignal::new(PromotionDraft::default());

    let on_save = move |_| {
        logging::log!("Saving promotion: {:?}", draft.get_untracked());
        alert("Promotion saved (mock). Check console for data.");
    };
    let on_preview = move |_| {
        let (title, subtitle) =
            draft.with_untracked(|d| (d.preview_title(), d.preview_subtitle()));
        alert(&format!("Preview:\n{} - {}", title, subtitle));
    };
    let on_cancel = move |_| {
        alert("Cancelled (mock)");
    };

    view! {
        <section class="promo-page">
            <div class="promo-hero">
                <div>
                    <h1>"Create New Promotion"</h1>
                    <p>
                        "Design and launch impactful promotions to boost sales and engage "
                        "your customers. Configure discounts, gifts, validity periods, and "
                        "eligibility criteria with ease."
                    </p>
                </div>
            </div>

            <div class="promo-layout">
                <div class="promo-form">
                    <BasicDetails draft=draft/>

                    <div class="promo-card">
                        <h3>
                            {move || {
                                if draft.with(|d| d.mode == PromotionMode::Discount) {
                                    "Discount Details"
                                } else {
                                    "Gift Details"
                                }
                            }}
                        </h3>
                        <Show
                            when=move || draft.with(|d| d.mode == PromotionMode::Discount)
                            fallback=move || view! { <GiftFields draft=draft/> }
                        >
                            <DiscountFields draft=draft/>
                        </Show>
                    </div>

                    <ValidityPeriod draft=draft/>
                    <Eligibility draft=draft/>

                    <div class="promo-actions">
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                        <button class="btn" on:click=on_preview>"Preview"</button>
                        <button class="btn btn-primary" on:click=on_save>"Save Promotion"</button>
                    </div>
                </div>

                <PreviewPane draft=draft/>
            </div>
        </section>
    }
}

// ============================================================================
// Form sections
// ============================================================================

#[component]
fn BasicDetails(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    view! {
        <div class="promo-card">
            <h3>"Basic Details"</h3>
            <label class="field-label">"Promotion Name"</label>
            <input
                class="field-input"
                placeholder="e.g., Summer Sale 2025"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />

            <label class="field-label">"Promotion Type"</label>
            <div class="seg-row">
                <button
                    class="seg-btn"
                    class:seg-active=move || draft.with(|d| d.mode == PromotionMode::Discount)
                    on:click=move |_| draft.update(|d| d.mode = PromotionMode::Discount)
                >
                    "Discount"
                </button>
                <button
                    class="seg-btn"
                    class:seg-active=move || draft.with(|d| d.mode == PromotionMode::Gift)
                    on:click=move |_| draft.update(|d| d.mode = PromotionMode::Gift)
                >
                    "Gift"
                </button>
            </div>
        </div>
    }
}

#[component]
fn DiscountFields(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    view! {
        <div class="seg-row">
            <button
                class="seg-btn"
                class:seg-active=move || draft.with(|d| d.discount_kind == DiscountKind::Percent)
                on:click=move |_| draft.update(|d| d.discount_kind = DiscountKind::Percent)
            >
                "Percentage"
            </button>
            <button
                class="seg-btn"
                class:seg-active=move || draft.with(|d| d.discount_kind == DiscountKind::Flat)
                on:click=move |_| draft.update(|d| d.discount_kind = DiscountKind::Flat)
            >
                "Flat Amount"
            </button>
        </div>

        <Show
            when=move || draft.with(|d| d.discount_kind == DiscountKind::Percent)
            fallback=move || {
                view! {
                    <label class="field-label">"Discount Value ($)"</label>
                    <input
                        class="field-input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="e.g., 10.00"
                        prop:value=move || draft.with(|d| d.flat.clone())
                        on:input=move |ev| draft.update(|d| d.flat = event_target_value(&ev))
                    />
                }
            }
        >
            <label class="field-label">"Discount Value (%)"</label>
            <input
                class="field-input"
                type="number"
                min="0"
                max="100"
                placeholder="e.g., 20"
                prop:value=move || draft.with(|d| d.percent.clone())
                on:input=move |ev| draft.update(|d| d.percent = event_target_value(&ev))
            />
        </Show>
    }
}

#[component]
fn GiftFields(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    view! {
        <label class="field-label">"Gift Name"</label>
        <input
            class="field-input"
            placeholder="e.g., Free Mug"
            prop:value=move || draft.with(|d| d.gift_name.clone())
            on:input=move |ev| draft.update(|d| d.gift_name = event_target_value(&ev))
        />

        <label class="field-label">"Gift Description"</label>
        <textarea
            class="field-input"
            rows="3"
            placeholder="Short description of the gift"
            prop:value=move || draft.with(|d| d.gift_desc.clone())
            on:input=move |ev| draft.update(|d| d.gift_desc = event_target_value(&ev))
        ></textarea>

        <div class="field-pair">
            <div>
                <label class="field-label">"Quantity"</label>
                <input
                    class="field-input"
                    type="number"
                    min="1"
                    prop:value=move || draft.with(|d| d.gift_qty.to_string())
                    on:input=move |ev| {
                        draft.update(|d| {
                            d.gift_qty = event_target_value(&ev).parse().unwrap_or(1);
                        })
                    }
                />
            </div>
            <div>
                <label class="field-label">"Gift Image"</label>
                <input
                    class="field-input"
                    placeholder="Paste image URL or leave blank"
                    prop:value=move || draft.with(|d| d.image_url.clone())
                    on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
fn ValidityPeriod(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    view! {
        <div class="promo-card">
            <h3>"Validity Period"</h3>
            <div class="field-pair">
                <div>
                    <label class="field-label">"Start Date"</label>
                    <input
                        class="field-input"
                        type="date"
                        prop:value=move || draft.with(|d| d.start_date.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.start_date = event_target_value(&ev))
                        }
                    />
                </div>
                <div>
                    <label class="field-label">"End Date"</label>
                    <input
                        class="field-input"
                        type="date"
                        prop:value=move || draft.with(|d| d.end_date.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.end_date = event_target_value(&ev))
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Eligibility(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    view! {
        <div class="promo-card">
            <h3>"Eligibility Criteria"</h3>
            <label class="field-label">"Minimum Purchase Amount"</label>
            <input
                class="field-input"
                type="number"
                min="0"
                step="0.01"
                placeholder="e.g., 50.00"
                prop:value=move || draft.with(|d| d.min_purchase.clone())
                on:input=move |ev| draft.update(|d| d.min_purchase = event_target_value(&ev))
            />

            <label class="field-label">"User Group"</label>
            <select
                class="field-input"
                prop:value=move || draft.with(|d| d.user_group.clone())
                on:change=move |ev| draft.update(|d| d.user_group = event_target_value(&ev))
            >
                <option value="">"Select user group"</option>
                <option value="all">"All Customers"</option>
                <option value="new">"New Customers"</option>
                <option value="vip">"VIP Members"</option>
            </select>
        </div>
    }
}

// ============================================================================
// Live preview
// ============================================================================

#[component]
fn PreviewPane(draft: RwSignal<PromotionDraft>) -> impl IntoView {
    let title = move || draft.with(|d| d.preview_title());
    let subtitle = move || draft.with(|d| d.preview_subtitle());
    let image_url = move || draft.with(|d| d.image_url.clone());

    view! {
        <aside class="promo-preview">
            <div class="promo-card">
                <h4>"Promotion Visual Preview"</h4>
                <div class="preview-frame">
                    <div class="preview-image">
                        {move || {
                            let url = image_url();
                            if url.is_empty() {
                                view! { <div class="no-image">"Image preview"</div> }.into_any()
                            } else {
                                view! { <img src=url alt="promotion visual"/> }.into_any()
                            }
                        }}
                    </div>
                    <div class="preview-copy">
                        <div class="preview-title">
                            {title} " - " <span class="preview-subtitle">{subtitle}</span>
                        </div>
                        <p class="muted">
                            "This is a preview of how the promotion might appear to customers."
                        </p>
                    </div>
                </div>
            </div>

            <div class="promo-card promo-summary">
                <div>{move || draft.with(|d| d.validity_display())}</div>
                <div>{move || draft.with(|d| d.audience_display())}</div>
                <Show when=move || draft.with(|d| d.mode == PromotionMode::Gift)>
                    <div>
                        {move || {
                            draft
                                .with(|d| {
                                    let gift = if d.gift_name.is_empty() {
                                        "Gift: none".to_string()
                                    } else {
                                        d.gift_name.clone()
                                    };
                                    format!("{} \u{2022} Qty: {}", gift, d.gift_qty)
                                })
                        }}
                    </div>
                </Show>
            </div>
        </aside>
    }
}
