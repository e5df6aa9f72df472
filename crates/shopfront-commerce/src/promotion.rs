//! Promotion draft state for the admin promotion builder.
//!
//! Purely local form state: never persisted, discarded on navigation away.
//! The live preview strings are derived from the draft on every render.

use serde::{Deserialize, Serialize};

/// Top-level promotion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PromotionMode {
    #[default]
    Discount,
    Gift,
}

impl PromotionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionMode::Discount => "discount",
            PromotionMode::Gift => "gift",
        }
    }
}

/// Discount sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DiscountKind {
    #[default]
    Percent,
    Flat,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percent => "percent",
            DiscountKind::Flat => "flat",
        }
    }
}

/// Editable promotion form state.
///
/// Fields are free-form strings straight from their inputs; the only
/// validation is what the input widgets themselves enforce (e.g. the
/// percent input is bounded 0-100 at the widget level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionDraft {
    pub mode: PromotionMode,
    pub discount_kind: DiscountKind,
    pub name: String,
    pub percent: String,
    pub flat: String,
    pub gift_name: String,
    pub gift_qty: i64,
    pub gift_desc: String,
    pub start_date: String,
    pub end_date: String,
    pub min_purchase: String,
    pub user_group: String,
    pub image_url: String,
}

impl Default for PromotionDraft {
    fn default() -> Self {
        Self {
            mode: PromotionMode::default(),
            discount_kind: DiscountKind::default(),
            name: String::new(),
            percent: String::new(),
            flat: String::new(),
            gift_name: String::new(),
            gift_qty: 1,
            gift_desc: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            min_purchase: String::new(),
            user_group: String::new(),
            image_url: String::new(),
        }
    }
}

impl PromotionDraft {
    /// Preview card title.
    pub fn preview_title(&self) -> String {
        if self.name.is_empty() {
            "Untitled Promotion".to_string()
        } else {
            self.name.clone()
        }
    }

    /// Preview card subtitle, derived from mode and sub-type.
    pub fn preview_subtitle(&self) -> String {
        match self.mode {
            PromotionMode::Discount => match self.discount_kind {
                DiscountKind::Percent => format!("{}% Off", or_zero(&self.percent)),
                DiscountKind::Flat => format!("${} Off", or_zero(&self.flat)),
            },
            PromotionMode::Gift => {
                let gift = if self.gift_name.is_empty() {
                    "No Gift"
                } else {
                    &self.gift_name
                };
                format!("Gift: {}", gift)
            }
        }
    }

    /// Validity line for the summary pane, with input placeholders as
    /// fallbacks.
    pub fn validity_display(&self) -> String {
        let start = non_empty_or(&self.start_date, "Start date");
        let end = non_empty_or(&self.end_date, "End date");
        format!("{} \u{2014} {}", start, end)
    }

    /// Audience line for the summary pane.
    pub fn audience_display(&self) -> String {
        non_empty_or(&self.user_group, "Target: All customers").to_string()
    }
}

fn or_zero(value: &str) -> &str {
    if value.is_empty() {
        "0"
    } else {
        value
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
