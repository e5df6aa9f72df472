//! Reusable catalog components.

pub mod product_card;
pub mod product_list;

pub use product_card::ProductCard;
pub use product_list::{Pager, ProductList};
