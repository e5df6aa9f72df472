//! Pagination descriptor for the catalog list.

use serde::{Deserialize, Serialize};

/// Pagination info, 1-indexed.
///
/// The pager is a pure display of this value; it never mutates it. A
/// descriptor with `total_pages <= 1` renders nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-indexed).
    pub current_page: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total_items: i64,
}

impl PageInfo {
    /// Build pagination info from item counts.
    pub fn new(page: i64, per_page: i64, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            (total_items + per_page - 1) / per_page
        };

        Self {
            current_page: page.clamp(1, total_pages),
            total_pages,
            per_page,
            total_items,
        }
    }

    /// Whether the pager has anything to show.
    pub fn is_multi_page(&self) -> bool {
        self.total_pages > 1
    }

    /// Check if on the first page (Previous disabled).
    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    /// Check if on the last page (Next disabled).
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Every page number, for the pager buttons.
    pub fn pages(&self) -> impl Iterator<Item = i64> {
        1..=self.total_pages
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 12, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_math() {
        let p = PageInfo::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.is_multi_page());
        assert!(!p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn test_bounds() {
        let p = PageInfo::new(1, 10, 45);
        assert!(p.is_first());
        let p = PageInfo::new(5, 10, 45);
        assert!(p.is_last());
    }

    #[test]
    fn test_current_page_clamped_to_range() {
        let p = PageInfo::new(9, 10, 45);
        assert_eq!(p.current_page, 5);
        let p = PageInfo::new(0, 10, 45);
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_single_page_renders_nothing() {
        let p = PageInfo::new(1, 10, 5);
        assert_eq!(p.total_pages, 1);
        assert!(!p.is_multi_page());

        let p = PageInfo::new(1, 10, 0);
        assert!(!p.is_multi_page());
    }

    #[test]
    fn test_pages_enumeration() {
        let p = PageInfo::new(3, 10, 45);
        assert_eq!(p.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
