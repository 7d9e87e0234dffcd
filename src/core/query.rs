//! Query parameters and pagination utilities for admin list endpoints
//!
//! The shop listing itself does not paginate — it reveals a growing window
//! over the full ordered result (see [`crate::catalog::window`]). Pagination
//! here backs the admin tables (orders, users, messages), which page through
//! their lists 10 rows at a time.

use serde::{Deserialize, Serialize};

/// Page/limit parameters extracted from URL query strings.
///
/// # Example
/// ```rust,ignore
/// // GET /admin/orders?page=2&limit=10
/// pub async fn list_orders(
///     Query(params): Query<QueryParams>,
/// ) -> Json<PaginatedResponse<Order>> { /* ... */ }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, clamped to a sane range
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }

    /// Slice one page out of a full result list
    pub fn paginate<T: Clone>(&self, items: &[T]) -> PaginatedResponse<T> {
        let page = self.page();
        let limit = self.limit();
        let start = (page - 1) * limit;
        let data = items
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect::<Vec<_>>();

        PaginatedResponse {
            data,
            pagination: PaginationMeta::new(page, limit, items.len()),
        }
    }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
