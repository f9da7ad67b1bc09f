//! Pagination constants and helpers for list endpoints.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer and the repository layer without a dependency cycle.

/// Default number of media entries per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of media entries per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a requested page size into `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset for a 1-based page number and page size.
///
/// Saturates instead of overflowing: an absurdly large page yields a huge
/// offset and an empty page, never a panic or a negative `OFFSET`.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}
