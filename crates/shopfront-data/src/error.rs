//! API error types.

use thiserror::Error;

/// Errors surfaced by a product load attempt.
///
/// Each variant's display string is the single user-visible message for
/// that failure. Cancellation is deliberately absent: a superseded request
/// is dropped by the caller's generation check and never becomes an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered 404 for the requested identifier.
    #[error("Product not found (HTTP 404)")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("Failed to load product: Status {0}")]
    Http(u16),

    /// The body parsed but carried no usable product record.
    #[error("Product data is empty or missing name.")]
    MalformedData,

    /// Transport or parse failure during fetch.
    #[error("Failed to load product: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_exact() {
        assert_eq!(ApiError::NotFound.to_string(), "Product not found (HTTP 404)");
    }

    #[test]
    fn test_http_message_embeds_status() {
        assert_eq!(
            ApiError::Http(503).to_string(),
            "Failed to load product: Status 503"
        );
    }

    #[test]
    fn test_malformed_message() {
        assert_eq!(
            ApiError::MalformedData.to_string(),
            "Product data is empty or missing name."
        );
    }

    #[test]
    fn test_network_message() {
        assert_eq!(
            ApiError::Network("connection reset".to_string()).to_string(),
            "Failed to load product: connection reset"
        );
    }
}
