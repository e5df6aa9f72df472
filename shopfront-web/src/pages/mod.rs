//! Application pages.

mod catalog;
mod detail_state;
mod product;
mod promotion;

pub use catalog::CatalogPage;
pub use detail_state::DetailState;
pub use product::ProductDetailPage;
pub use promotion::PromotionPage;
