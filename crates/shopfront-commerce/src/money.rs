//! Money formatting for the storefront.
//!
//! The catalog card shows dollar prices with two decimals; the product
//! detail page shows đồng prices rounded to whole units with `.` thousands
//! grouping and a trailing " đ". Both go through [`Money`] so the rounding
//! rules live in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies this storefront renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Vietnamese đồng, whole units only, rendered as "1.234.567 đ".
    #[default]
    VND,
    /// US dollar, rendered as "$49.99".
    USD,
}

impl Currency {
    /// Number of decimal places carried in [`Money::amount_minor`].
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
        }
    }
}

/// A monetary value stored in the smallest unit of its currency.
///
/// Integer storage avoids the floating-point drift that plagues price
/// arithmetic; conversion from wire floats rounds half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents for USD, đồng for VND).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a value from a decimal amount, rounding to the nearest
    /// representable unit.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Convert back to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format for display: "$49.99" or "1.234.567 đ".
    pub fn display(&self) -> String {
        match self.currency {
            Currency::USD => format!("${:.2}", self.to_decimal()),
            Currency::VND => format!("{} \u{111}", group_thousands(self.amount_minor)),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a `.` every three digits from the right: 1234567 -> "1.234.567".
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a wire price as đồng: round to whole units, group thousands,
/// append the currency suffix. `1234567.0` -> "1.234.567 đ".
pub fn format_vnd(value: f64) -> String {
    Money::from_decimal(value, Currency::VND).display()
}

/// Final card price after an optional sale percentage.
///
/// A missing or zero percentage leaves the list price unchanged.
pub fn sale_price(list_price: f64, sale_percentage: Option<f64>) -> f64 {
    match sale_percentage {
        Some(p) if p != 0.0 => list_price * (1.0 - p / 100.0),
        _ => list_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        // VND carries no decimals; fractional input rounds.
        let m = Money::from_decimal(1000.6, Currency::VND);
        assert_eq!(m.amount_minor, 1001);
    }

    #[test]
    fn test_usd_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_vnd_display_grouping() {
        assert_eq!(format_vnd(1_234_567.0), "1.234.567 \u{111}");
        assert_eq!(format_vnd(0.0), "0 \u{111}");
        assert_eq!(format_vnd(999.0), "999 \u{111}");
        assert_eq!(format_vnd(1000.0), "1.000 \u{111}");
        assert_eq!(format_vnd(100_000.0), "100.000 \u{111}");
    }

    #[test]
    fn test_vnd_display_rounds_to_whole_units() {
        assert_eq!(format_vnd(1499.5), "1.500 \u{111}");
        assert_eq!(format_vnd(1499.4), "1.499 \u{111}");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-1_234_567), "-1.234.567");
    }

    #[test]
    fn test_sale_price_applied() {
        let p = sale_price(100.0, Some(20.0));
        assert!((p - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_sale_price_absent_or_zero() {
        assert_eq!(sale_price(100.0, None), 100.0);
        assert_eq!(sale_price(100.0, Some(0.0)), 100.0);
    }

    #[test]
    fn test_sale_price_rounds_to_cents_for_display() {
        // 19.99 at 15% off -> 16.9915, shown as $16.99
        let m = Money::from_decimal(sale_price(19.99, Some(15.0)), Currency::USD);
        assert_eq!(m.display(), "$16.99");
    }
}
