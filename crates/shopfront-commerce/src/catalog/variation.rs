//! Product variations and the quantity clamp.

use serde::{Deserialize, Serialize};

/// A purchasable product configuration with its own price and stock.
///
/// Owned by the detail page for the lifetime of one loaded product; the
/// selected variation is an index into the list, never a copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    /// Unique display label.
    pub name: String,
    pub price: f64,
    /// Remaining purchasable units.
    #[serde(default)]
    pub stock: i64,
}

/// Clamp a requested quantity to `[1, stock]`.
///
/// The lower bound is applied first, so a request below 1 always yields 1
/// even when stock is 0; action buttons are the gate in that case.
pub fn clamp_quantity(requested: i64, stock: i64) -> i64 {
    if requested < 1 {
        1
    } else if requested > stock {
        stock
    } else {
        requested
    }
}
