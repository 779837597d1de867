//! Pagination window for listing queries.

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Upper bound on items per page
pub const MAX_PAGE_SIZE: i64 = 100;

/// A limit/offset window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    /// Build a window, clamping the limit to `1..=MAX_PAGE_SIZE` and the offset to `>= 0`
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}
