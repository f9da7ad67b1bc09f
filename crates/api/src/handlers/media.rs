//! Handlers for the `/media` resource (personal collection CRUD).
//!
//! Every operation is scoped to the authenticated user's own entries;
//! global template rows are invisible and untouchable through this surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::pagination::{clamp_limit, clamp_page, offset_for, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use reelbase_core::types::DbId;
use reelbase_db::models::media_entry::{
    MediaEntry, MediaFilter, MediaType, NewMediaEntry, UpdateMediaEntry,
};
use reelbase_db::repositories::MediaRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::MediaListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

fn default_rating() -> i32 {
    5
}

/// Request body for `POST /media`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub media_type: MediaType,
    #[validate(length(min = 1, message = "director is required"))]
    pub director: String,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
}

/// Request body for `PUT /media/{id}`. All fields are optional; only
/// provided fields are applied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMediaRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    #[validate(length(min = 1, message = "director must not be empty"))]
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

/// Paginated response for `GET /media`.
#[derive(Debug, Serialize)]
pub struct MediaListResponse {
    pub entries: Vec<MediaEntry>,
    pub total_count: i64,
    pub has_more: bool,
    pub page: i64,
    pub limit: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/media
///
/// List the authenticated user's collection with pagination, search, and
/// type filtering, newest first.
pub async fn list_entries(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let offset = offset_for(page, limit);

    let filter = MediaFilter {
        search: params.search.filter(|s| !s.is_empty()),
        media_type: params.media_type,
        limit,
        offset,
    };

    let entries = MediaRepo::list_owned(&state.pool, auth.user_id, &filter).await?;
    let total_count = MediaRepo::count_owned(&state.pool, auth.user_id, &filter).await?;
    let has_more = offset.saturating_add(entries.len() as i64) < total_count;

    Ok(Json(DataResponse {
        data: MediaListResponse {
            entries,
            total_count,
            has_more,
            page,
            limit,
        },
    }))
}

/// POST /api/v1/media
///
/// Create an entry in the authenticated user's collection. Returns 201.
pub async fn create_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMediaRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let new_entry = NewMediaEntry {
        owner_id: auth.user_id,
        title: input.title,
        media_type: input.media_type,
        director: input.director,
        budget: input.budget,
        location: input.location,
        duration: input.duration,
        year: input.year,
        genre: input.genre,
        description: input.description,
        poster_url: input.poster_url,
        rating: input.rating,
        is_global: false,
        global_source_id: None,
    };

    let entry = MediaRepo::create(&state.pool, &new_entry).await?;

    tracing::info!(entry_id = entry.id, user_id = auth.user_id, "Media entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/media/{id}
///
/// Fetch a single entry. 404 when absent or owned by someone else.
pub async fn get_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = MediaRepo::find_owned(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaEntry",
            id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/media/{id}
///
/// Update an entry's descriptive fields. 404 when absent or foreign.
pub async fn update_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let update = UpdateMediaEntry {
        title: input.title,
        media_type: input.media_type,
        director: input.director,
        budget: input.budget,
        location: input.location,
        duration: input.duration,
        year: input.year,
        genre: input.genre,
        description: input.description,
        poster_url: input.poster_url,
        rating: input.rating,
    };

    let entry = MediaRepo::update_owned(&state.pool, auth.user_id, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaEntry",
            id,
        }))?;

    tracing::info!(entry_id = id, user_id = auth.user_id, "Media entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/media/{id}
///
/// Delete an entry from the user's collection. Returns 204; the global
/// source row of a seeded copy is never touched.
pub async fn delete_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MediaRepo::delete_owned(&state.pool, auth.user_id, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MediaEntry",
            id,
        }));
    }

    tracing::info!(entry_id = id, user_id = auth.user_id, "Media entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
