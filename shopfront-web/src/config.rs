//! Application configuration.

use leptos::prelude::window;

/// Runtime configuration for the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absolute base URL of the storefront API, e.g. "https://host/api".
    pub api_base: String,
}

impl AppConfig {
    /// Resolve the API base from the window origin.
    ///
    /// The storefront API is served same-origin under `/api`.
    pub fn from_window() -> Self {
        let origin = window().location().origin().unwrap_or_default();
        Self {
            api_base: format!("{}/api", origin),
        }
    }
}
