//! Shopfront browser application.
//!
//! Client-side rendered Leptos app with three surfaces:
//! - the catalog grid with pagination,
//! - the product detail page (gallery, variants, quantity, derived pricing),
//! - the admin promotion builder with live preview.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
