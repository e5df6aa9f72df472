//! HTTP client for the storefront REST API.
//!
//! A thin wrapper over `reqwest` (the browser's `fetch` on wasm32) with a
//! base URL and typed decoding of the two storefront endpoints:
//!
//! ```rust,ignore
//! use shopfront_data::ApiClient;
//!
//! let client = ApiClient::new("https://shop.example.com/api");
//! let detail = client.get_product("SP-001").await?;
//! let page = client.get_products(1, 12).await?;
//! ```
//!
//! Errors carry the exact user-visible message for the failure; see
//! [`ApiError`]. Request cancellation is not handled here: callers guard
//! against stale resolutions with a request generation, and dropping the
//! returned future aborts the underlying browser fetch.

mod error;
mod payload;

pub use error::ApiError;
pub use payload::{ProductDetailPayload, ProductListPayload};

use url::Url;

/// Client for the storefront API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at an absolute base URL, e.g.
    /// `https://shop.example.com/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one product by identifier: `GET {base}/products/{id}`.
    ///
    /// The identifier is percent-escaped as a single path segment.
    pub async fn get_product(&self, id: &str) -> Result<ProductDetailPayload, ApiError> {
        let url = self.endpoint(&["products", id])?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response.status().as_u16())?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ProductDetailPayload::from_value(body)
    }

    /// Fetch one page of the listing:
    /// `GET {base}/products?page={page}&per_page={per_page}`.
    pub async fn get_products(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<ProductListPayload, ApiError> {
        let mut url = self.endpoint(&["products"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response.status().as_u16())?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Join escaped path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::Network(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Map an HTTP status to the error taxonomy; 2xx passes through.
fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        404 => Err(ApiError::NotFound),
        s if !(200..300).contains(&s) => Err(ApiError::Http(s)),
        _ => Ok(()),
    }
}
