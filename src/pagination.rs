use serde::Serialize;

/// Bounds for one page of a listing. `page` is 1-based, `rows` is the page
/// size. The arithmetic imposes no upper bound of its own; handlers clamp
/// the raw query parameters before building one of these.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: i64,
    pub rows: i64,
}

impl PageQuery {
    /// Saturates instead of overflowing for extreme pages; a saturated
    /// offset is simply past the end and yields an empty page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.rows)
    }

    pub fn limit(&self) -> i64 {
        self.rows
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub rows: i64,
    pub count: i64,
}

/// Response envelope for paginated listings: one page of items plus the
/// total matching count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, query: &PageQuery, count: i64) -> Self {
        Paginated {
            items,
            pagination: Pagination {
                page: query.page,
                rows: query.rows,
                count,
            },
        }
    }
}
