//! Pagination query parameters

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::page::DEFAULT_PAGE_SIZE;
use crate::domain::models::Page;

/// `?limit=&offset=` on listing endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaginationQuery {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "offset must be at least 0"))]
    pub offset: Option<i64>,
}

impl From<PaginationQuery> for Page {
    fn from(query: PaginationQuery) -> Self {
        Page::new(query.limit.unwrap_or(DEFAULT_PAGE_SIZE), query.offset.unwrap_or(0))
    }
}
