//! Media entry entity model and DTOs.
//!
//! A media entry is either a user-owned row in someone's personal collection
//! or a global template row (`is_global = true`) that seeding copies from.

use reelbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of work a media entry describes.
///
/// Maps to the PostgreSQL `media_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Movie,
    TvShow,
}

/// Full media entry row from the `media_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MediaEntry {
    pub id: DbId,
    /// Owner of this copy. For global template rows this is only an
    /// attribution, not a personal-collection membership.
    pub owner_id: DbId,
    pub title: String,
    pub media_type: MediaType,
    pub director: String,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    /// 1-5 star rating.
    pub rating: i32,
    /// True for template rows available to be copied into user collections.
    pub is_global: bool,
    /// Lineage back-reference to the global row a seeded copy came from.
    /// Traceability only -- never dereferenced for authorization.
    pub global_source_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for inserting a media entry (manual create or seeded copy).
#[derive(Debug, Clone)]
pub struct NewMediaEntry {
    pub owner_id: DbId,
    pub title: String,
    pub media_type: MediaType,
    pub director: String,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: i32,
    pub is_global: bool,
    pub global_source_id: Option<DbId>,
}

impl NewMediaEntry {
    /// Build a personal copy of a global template row for `owner_id`.
    ///
    /// Carries over every descriptive attribute, clears the global flag, and
    /// records the source row id for lineage.
    pub fn copy_of(source: &MediaEntry, owner_id: DbId) -> Self {
        Self {
            owner_id,
            title: source.title.clone(),
            media_type: source.media_type,
            director: source.director.clone(),
            budget: source.budget.clone(),
            location: source.location.clone(),
            duration: source.duration.clone(),
            year: source.year.clone(),
            genre: source.genre.clone(),
            description: source.description.clone(),
            poster_url: source.poster_url.clone(),
            rating: source.rating,
            is_global: false,
            global_source_id: Some(source.id),
        }
    }
}

/// DTO for updating an existing media entry. All fields are optional;
/// only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateMediaEntry {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<i32>,
}

/// Filter for listing a user's personal collection.
#[derive(Debug, Default)]
pub struct MediaFilter {
    /// Case-insensitive substring match over title, director, and genre.
    pub search: Option<String>,
    /// Restrict to one media type; `None` means all.
    pub media_type: Option<MediaType>,
    pub limit: i64,
    pub offset: i64,
}
