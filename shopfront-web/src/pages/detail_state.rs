//! View state for the product detail page.
//!
//! A plain struct so every transition is host-testable. The page moves
//! through three phases: loading, then either error (terminal until the
//! next fetch) or ready. Each fetch is tagged with a generation token;
//! a resolution whose token is stale is ignored outright, so a superseded
//! request can never overwrite newer state.

use shopfront_commerce::catalog::{clamp_quantity, display_price, ProductRecord, Variation};
use shopfront_commerce::money::format_vnd;
use shopfront_data::{ApiError, ProductDetailPayload};

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    generation: u64,
    loading: bool,
    error: Option<String>,
    product: Option<ProductRecord>,
    images: Vec<String>,
    variations: Vec<Variation>,
    selected_image: usize,
    selected_variation: Option<usize>,
    qty: i64,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            qty: 1,
            ..Default::default()
        }
    }

    /// Start a new load attempt and return its generation token.
    ///
    /// Clears any prior error and enters the loading phase; the previous
    /// product stays in place until a resolution replaces or clears it.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a fetch resolution, ignoring it when the token is stale.
    pub fn apply_load(&mut self, token: u64, result: Result<ProductDetailPayload, ApiError>) {
        if token != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.product = Some(payload.product);
                self.images = payload.images;
                self.variations = payload.variations;
                self.selected_image = 0;
                self.selected_variation = if self.variations.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.qty = 1;
                self.error = None;
            }
            Err(err) => {
                if err == ApiError::NotFound {
                    self.product = None;
                }
                self.error = Some(err.to_string());
            }
        }
    }

    // --- Phase queries -----------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.clone()
    }

    pub fn has_product(&self) -> bool {
        self.product.is_some()
    }

    pub fn product(&self) -> Option<&ProductRecord> {
        self.product.as_ref()
    }

    // --- Gallery -----------------------------------------------------------

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    pub fn select_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected_image = index;
        }
    }

    /// The main image: selection, else the first image, else none.
    pub fn main_image(&self) -> Option<&str> {
        self.images
            .get(self.selected_image)
            .or_else(|| self.images.first())
            .map(String::as_str)
    }

    // --- Variations and quantity -------------------------------------------

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn selected_variation(&self) -> Option<usize> {
        self.selected_variation
    }

    /// Select a variation and re-clamp the current quantity against its
    /// stock. The quantity is not reset to 1.
    pub fn select_variation(&mut self, index: usize) {
        if index < self.variations.len() {
            self.selected_variation = Some(index);
            self.request_qty(self.qty);
        }
    }

    /// Stock ceiling of the selected variation, 0 when none is selected.
    pub fn available_stock(&self) -> i64 {
        self.selected_variation
            .and_then(|i| self.variations.get(i))
            .map(|v| v.stock)
            .unwrap_or(0)
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }

    /// Request a quantity; the stored value is clamped to `[1, stock]`.
    pub fn request_qty(&mut self, requested: i64) {
        self.qty = clamp_quantity(requested, self.available_stock());
    }

    /// Whether add-to-cart / buy-now are enabled.
    pub fn can_purchase(&self) -> bool {
        let stock = self.available_stock();
        stock > 0 && self.qty <= stock
    }

    // --- Derived pricing ---------------------------------------------------

    /// The price line, derived from current state on every render.
    pub fn price_display(&self) -> String {
        match &self.product {
            Some(record) => display_price(record, &self.variations, self.selected_variation),
            None => String::new(),
        }
    }

    /// Struck-through list price, when the record carries one.
    pub fn list_price_display(&self) -> Option<String> {
        self.product
            .as_ref()
            .and_then(|p| p.list_price)
            .map(format_vnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::catalog::PriceRange;

    fn payload(variations: Vec<Variation>, images: Vec<&str>) -> ProductDetailPayload {
        ProductDetailPayload {
            product: ProductRecord {
                name: "Ceramic Mug".to_string(),
                price: Some(45000.0),
                list_price: Some(60000.0),
                ..Default::default()
            },
            images: images.into_iter().map(String::from).collect(),
            variations,
        }
    }

    fn variation(name: &str, price: f64, stock: i64) -> Variation {
        Variation {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[test]
    fn test_successful_load_resets_selection() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        assert!(state.is_loading());

        state.apply_load(
            token,
            Ok(payload(
                vec![variation("S", 10.0, 4), variation("L", 20.0, 2)],
                vec!["a.jpg", "b.jpg"],
            )),
        );

        assert!(!state.is_loading());
        assert!(state.has_product());
        assert_eq!(state.selected_variation(), Some(0));
        assert_eq!(state.selected_image(), 0);
        assert_eq!(state.qty(), 1);
        assert_eq!(state.price_display(), "10 \u{111}");
    }

    #[test]
    fn test_load_without_variations() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![], vec![])));

        assert_eq!(state.selected_variation(), None);
        assert_eq!(state.available_stock(), 0);
        assert!(!state.can_purchase());
        assert_eq!(state.price_display(), "45.000 \u{111}");
    }

    #[test]
    fn test_quantity_clamps_against_selected_stock() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![variation("S", 10.0, 4)], vec![])));

        state.request_qty(0);
        assert_eq!(state.qty(), 1);
        state.request_qty(10);
        assert_eq!(state.qty(), 4);
        state.request_qty(3);
        assert_eq!(state.qty(), 3);
    }

    #[test]
    fn test_variation_switch_reclamps_current_qty() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(
            token,
            Ok(payload(
                vec![variation("S", 10.0, 8), variation("L", 20.0, 2)],
                vec![],
            )),
        );

        state.request_qty(5);
        assert_eq!(state.qty(), 5);

        // Switching to the smaller variation caps at its stock, without
        // resetting to 1.
        state.select_variation(1);
        assert_eq!(state.qty(), 2);
        assert_eq!(state.price_display(), "20 \u{111}");

        // Switching back keeps the clamped value.
        state.select_variation(0);
        assert_eq!(state.qty(), 2);
    }

    #[test]
    fn test_not_found_clears_product() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![], vec![])));
        assert!(state.has_product());

        let token = state.begin_load();
        state.apply_load(token, Err(ApiError::NotFound));

        assert!(!state.has_product());
        assert_eq!(
            state.error_message().as_deref(),
            Some("Product not found (HTTP 404)")
        );
    }

    #[test]
    fn test_http_error_keeps_message() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Err(ApiError::Http(500)));
        assert_eq!(
            state.error_message().as_deref(),
            Some("Failed to load product: Status 500")
        );
    }

    #[test]
    fn test_stale_resolution_is_ignored() {
        let mut state = DetailState::new();

        let first = state.begin_load();
        let second = state.begin_load();

        // The superseded request resolves late with an error; nothing moves.
        state.apply_load(first, Err(ApiError::Http(500)));
        assert!(state.is_loading());
        assert_eq!(state.error_message(), None);

        // The current request lands normally.
        state.apply_load(second, Ok(payload(vec![variation("S", 10.0, 4)], vec![])));
        assert!(state.has_product());
        assert_eq!(state.error_message(), None);

        // A stale success after the current one is also dropped.
        state.apply_load(first, Ok(payload(vec![variation("X", 99.0, 1)], vec![])));
        assert_eq!(state.price_display(), "10 \u{111}");
    }

    #[test]
    fn test_begin_load_clears_error_not_product() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![], vec![])));

        let token = state.begin_load();
        state.apply_load(token, Err(ApiError::Http(503)));
        assert!(state.error_message().is_some());
        assert!(state.has_product());

        state.begin_load();
        assert_eq!(state.error_message(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn test_gallery_selection_and_fallbacks() {
        let mut state = DetailState::new();
        assert_eq!(state.main_image(), None);

        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![], vec!["a.jpg", "b.jpg"])));

        assert_eq!(state.main_image(), Some("a.jpg"));
        state.select_image(1);
        assert_eq!(state.main_image(), Some("b.jpg"));

        // Out-of-range selection is a no-op.
        state.select_image(7);
        assert_eq!(state.main_image(), Some("b.jpg"));
    }

    #[test]
    fn test_range_price_before_selection() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        let mut p = payload(
            vec![variation("S", 5.0, 1), variation("L", 15.0, 1)],
            vec![],
        );
        p.product.price_range = Some(PriceRange { min: 5.0, max: 15.0 });
        state.apply_load(token, Ok(p));

        // First variation is auto-selected, so its price wins...
        assert_eq!(state.price_display(), "5 \u{111}");

        // ...but with no selection the range shows.
        let mut cleared = state.clone();
        cleared.selected_variation = None;
        assert_eq!(cleared.price_display(), "5 \u{111} - 15 \u{111}");
    }

    #[test]
    fn test_list_price_strikethrough() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![], vec![])));
        assert_eq!(state.list_price_display().as_deref(), Some("60.000 \u{111}"));
    }

    #[test]
    fn test_purchase_gate() {
        let mut state = DetailState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![variation("S", 10.0, 0)], vec![])));

        // Selected variation has zero stock: qty stays at 1, actions gated.
        assert_eq!(state.qty(), 1);
        assert!(!state.can_purchase());

        let token = state.begin_load();
        state.apply_load(token, Ok(payload(vec![variation("S", 10.0, 3)], vec![])));
        assert!(state.can_purchase());
    }
}
