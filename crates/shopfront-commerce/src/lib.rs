//! Storefront domain types and view-state logic.
//!
//! Everything in this crate is pure and host-testable: money formatting,
//! catalog records, variation/quantity rules, the detail page's derived
//! pricing, pagination math, and the promotion draft with its live preview
//! strings. Network and rendering concerns live in `shopfront-data` and
//! `shopfront-web` respectively.

pub mod catalog;
pub mod money;
pub mod pagination;
pub mod promotion;

pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        clamp_quantity, display_price, PriceRange, ProductRecord, ProductSummary, Variation,
    };
    pub use crate::money::{format_vnd, sale_price, Currency, Money};
    pub use crate::pagination::PageInfo;
    pub use crate::promotion::{DiscountKind, PromotionDraft, PromotionMode};
}
