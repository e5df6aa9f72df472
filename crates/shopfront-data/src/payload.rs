//! Response payloads for the storefront API.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopfront_commerce::catalog::{ProductRecord, ProductSummary, Variation};
use shopfront_commerce::pagination::PageInfo;

/// Everything the product detail page needs from one fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetailPayload {
    pub product: ProductRecord,
    pub images: Vec<String>,
    pub variations: Vec<Variation>,
}

impl ProductDetailPayload {
    /// Decode a detail response body.
    ///
    /// The record is accepted either at the top level or nested under a
    /// `product` key; `images` and `variations` default to empty. A record
    /// without a non-empty `name` is rejected as malformed.
    pub fn from_value(mut body: Value) -> Result<Self, ApiError> {
        let images: Vec<String> = take_field(&mut body, "images")?;
        let variations: Vec<Variation> = take_field(&mut body, "variations")?;

        let record_value = if body.get("product").is_some() {
            body["product"].take()
        } else {
            body
        };

        let product: ProductRecord =
            serde_json::from_value(record_value).map_err(|_| ApiError::MalformedData)?;
        if product.name.is_empty() {
            return Err(ApiError::MalformedData);
        }

        Ok(Self {
            product,
            images,
            variations,
        })
    }
}

/// Pull an optional array field out of the body, defaulting when absent.
fn take_field<T>(body: &mut Value, key: &str) -> Result<T, ApiError>
where
    T: Default + serde::de::DeserializeOwned,
{
    match body.get_mut(key) {
        None => Ok(T::default()),
        Some(v) if v.is_null() => Ok(T::default()),
        Some(v) => serde_json::from_value(v.take())
            .map_err(|e| ApiError::Network(format!("invalid `{}` field: {}", key, e))),
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListPayload {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_record() {
        let body = json!({
            "name": "Ceramic Mug",
            "price": 45000,
            "images": ["a.jpg", "b.jpg"],
            "variations": [{"name": "Blue", "price": 45000, "stock": 4}]
        });
        let payload = ProductDetailPayload::from_value(body).unwrap();
        assert_eq!(payload.product.name, "Ceramic Mug");
        assert_eq!(payload.images.len(), 2);
        assert_eq!(payload.variations[0].stock, 4);
    }

    #[test]
    fn test_nested_record() {
        let body = json!({
            "product": {"name": "Ceramic Mug", "listPrice": 60000},
            "images": ["a.jpg"],
            "variations": []
        });
        let payload = ProductDetailPayload::from_value(body).unwrap();
        assert_eq!(payload.product.name, "Ceramic Mug");
        assert_eq!(payload.product.list_price, Some(60000.0));
        assert_eq!(payload.images, vec!["a.jpg".to_string()]);
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let body = json!({"name": "Bare"});
        let payload = ProductDetailPayload::from_value(body).unwrap();
        assert!(payload.images.is_empty());
        assert!(payload.variations.is_empty());
    }

    #[test]
    fn test_null_lists_default_empty() {
        let body = json!({"name": "Bare", "images": null, "variations": null});
        let payload = ProductDetailPayload::from_value(body).unwrap();
        assert!(payload.images.is_empty());
        assert!(payload.variations.is_empty());
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let body = json!({"price": 100});
        assert_eq!(
            ProductDetailPayload::from_value(body),
            Err(ApiError::MalformedData)
        );
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let body = json!({"product": {"name": ""}});
        assert_eq!(
            ProductDetailPayload::from_value(body),
            Err(ApiError::MalformedData)
        );
    }

    #[test]
    fn test_bad_images_shape_is_parse_failure() {
        let body = json!({"name": "X", "images": "not-a-list"});
        match ProductDetailPayload::from_value(body) {
            Err(ApiError::Network(msg)) => assert!(msg.contains("images")),
            other => panic!("expected parse failure, got {:?}", other),
        }
    }

    #[test]
    fn test_list_payload() {
        let body = json!({
            "products": [{"product_id": "p-1", "name": "A", "price_per_day": 9.5}],
            "pagination": {"current_page": 2, "total_pages": 5, "per_page": 12, "total_items": 55}
        });
        let page: ProductListPayload = serde_json::from_value(body).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.pagination.current_page, 2);
        assert!(page.pagination.is_multi_page());
    }
}
