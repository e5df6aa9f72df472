//! Derived price display for the product detail page.

use crate::catalog::{ProductRecord, Variation};
use crate::money::format_vnd;
use serde::{Deserialize, Serialize};

/// Min/max summary of variation prices, shown when nothing is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// A range with equal bounds collapses to a single price.
    pub fn is_collapsed(&self) -> bool {
        self.min == self.max
    }
}

/// The price string for the detail page, derived on every render.
///
/// Order of precedence:
/// 1. the selected variation's price;
/// 2. a "min - max" range when more than one variation exists and the
///    range has distinct bounds;
/// 3. with any variations at all (or a collapsed range), the first
///    variation's price, else the range minimum, else the base price;
/// 4. the base product price.
pub fn display_price(
    record: &ProductRecord,
    variations: &[Variation],
    selected: Option<usize>,
) -> String {
    if let Some(v) = selected.and_then(|i| variations.get(i)) {
        return format_vnd(v.price);
    }

    let range = record.price_range;
    if variations.len() > 1 {
        if let Some(r) = range.filter(|r| !r.is_collapsed()) {
            return format!("{} - {}", format_vnd(r.min), format_vnd(r.max));
        }
    }

    if !variations.is_empty() {
        let price = variations
            .first()
            .map(|v| v.price)
            .or(range.map(|r| r.min))
            .or(record.price)
            .unwrap_or(0.0);
        return format_vnd(price);
    }

    format_vnd(record.price.unwrap_or(0.0))
}
