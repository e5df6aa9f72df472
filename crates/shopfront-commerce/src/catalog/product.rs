//! Product types as they arrive from the storefront API.

use crate::money::{sale_price, Currency, Money};
use serde::{Deserialize, Serialize};

/// A product summary as shown on a catalog card.
///
/// This is the listing-endpoint shape; field names follow the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub product_id: String,
    pub name: String,
    /// List price in dollars.
    #[serde(default)]
    pub price_per_day: f64,
    /// Percentage off, when the product is on sale.
    #[serde(default)]
    pub sale_percentage: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl ProductSummary {
    /// Whether the card should show the struck-through list price.
    pub fn is_on_sale(&self) -> bool {
        self.sale_percentage.map(|p| p > 0.0).unwrap_or(false)
    }

    /// The price the card displays, after any sale percentage.
    pub fn final_price(&self) -> f64 {
        sale_price(self.price_per_day, self.sale_percentage)
    }

    /// Formatted final price, e.g. "$79.99".
    pub fn final_price_display(&self) -> String {
        Money::from_decimal(self.final_price(), Currency::USD).display()
    }

    /// Formatted list price, for the strikethrough.
    pub fn list_price_display(&self) -> String {
        Money::from_decimal(self.price_per_day, Currency::USD).display()
    }

    /// First image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// The product record on the detail page.
///
/// Immutable once fetched; a re-fetch replaces the whole record. Identity
/// comes from the route, so no id field is carried here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductRecord {
    pub name: String,
    /// Base price, used when no variation or range applies.
    #[serde(default)]
    pub price: Option<f64>,
    /// Original price shown struck through next to the final price.
    #[serde(default, rename = "listPrice")]
    pub list_price: Option<f64>,
    /// Min/max summary of variation prices.
    #[serde(default, rename = "priceRange")]
    pub price_range: Option<super::PriceRange>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "averageRating")]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub sold: Option<i64>,
}

impl ProductRecord {
    /// Rating line for the detail header, e.g. "4.5 ★" or "No ratings yet".
    pub fn rating_display(&self) -> String {
        match self.average_rating {
            Some(r) => format!("{} \u{2605}", r),
            None => "No ratings yet".to_string(),
        }
    }

    /// Sold-count line for the detail header.
    pub fn sold_display(&self) -> String {
        match self.sold {
            Some(n) => format!("{} sold", n),
            None => "\u{2014} sold".to_string(),
        }
    }

    /// Description with the empty fallback applied.
    pub fn description_display(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "No description available.".to_string())
    }
}
