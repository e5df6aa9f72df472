//! Catalog types: product records, variations, and derived pricing.

mod pricing;
mod product;
mod variation;

pub use pricing::{display_price, PriceRange};
pub use product::{ProductRecord, ProductSummary};
pub use variation::{clamp_quantity, Variation};
