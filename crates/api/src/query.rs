//! Shared query parameter types for API handlers.

use reelbase_db::models::media_entry::MediaType;
use serde::Deserialize;

/// Query parameters for `GET /media` (`?page=&limit=&search=&media_type=`).
///
/// `page` is 1-based; values are clamped via `reelbase_core::pagination`.
#[derive(Debug, Default, Deserialize)]
pub struct MediaListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Case-insensitive substring over title, director, and genre.
    pub search: Option<String>,
    /// Restrict to one media type; absent means all.
    pub media_type: Option<MediaType>,
}

/// Query parameters for `POST /seed` (`?force=`).
#[derive(Debug, Default, Deserialize)]
pub struct SeedParams {
    /// Bypass the "already seeded" gate and re-run the copy logic.
    #[serde(default)]
    pub force: bool,
}
