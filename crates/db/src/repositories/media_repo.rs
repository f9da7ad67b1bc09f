//! Repository for the `media_entries` table.
//!
//! Personal-collection queries are always scoped to an owner and exclude
//! global template rows; the global pool has its own read-only accessors
//! used by seeding.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::media_entry::{MediaEntry, MediaFilter, NewMediaEntry, UpdateMediaEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, media_type, director, budget, location, duration, \
                        year, genre, description, poster_url, rating, is_global, \
                        global_source_id, created_at, updated_at";

/// Provides CRUD operations for media entries.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a single entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMediaEntry) -> Result<MediaEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_entries
                (owner_id, title, media_type, director, budget, location, duration,
                 year, genre, description, poster_url, rating, is_global, global_source_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(&input.director)
            .bind(&input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(&input.year)
            .bind(&input.genre)
            .bind(&input.description)
            .bind(&input.poster_url)
            .bind(input.rating)
            .bind(input.is_global)
            .bind(input.global_source_id)
            .fetch_one(pool)
            .await
    }

    /// Find an entry in a user's personal collection.
    ///
    /// Returns `None` when the row does not exist, belongs to someone else,
    /// or is a global template row.
    pub async fn find_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<MediaEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_entries
             WHERE id = $1 AND owner_id = $2 AND is_global = false"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of a user's personal collection, newest first.
    ///
    /// `filter.search` matches title, director, or genre case-insensitively;
    /// `filter.media_type` restricts to one kind when set.
    pub async fn list_owned(
        pool: &PgPool,
        owner_id: DbId,
        filter: &MediaFilter,
    ) -> Result<Vec<MediaEntry>, sqlx::Error> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
        let query = format!(
            "SELECT {COLUMNS} FROM media_entries
             WHERE owner_id = $1 AND is_global = false
               AND ($2::text IS NULL OR title ILIKE $2 OR director ILIKE $2 OR genre ILIKE $2)
               AND ($3::media_type IS NULL OR media_type = $3)
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(owner_id)
            .bind(&pattern)
            .bind(filter.media_type)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of rows the same filter would match, ignoring pagination.
    pub async fn count_owned(
        pool: &PgPool,
        owner_id: DbId,
        filter: &MediaFilter,
    ) -> Result<i64, sqlx::Error> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM media_entries
             WHERE owner_id = $1 AND is_global = false
               AND ($2::text IS NULL OR title ILIKE $2 OR director ILIKE $2 OR genre ILIKE $2)
               AND ($3::media_type IS NULL OR media_type = $3)",
        )
        .bind(owner_id)
        .bind(&pattern)
        .bind(filter.media_type)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Update an entry in a user's personal collection. Only non-`None`
    /// fields in `input` are applied; `updated_at` is stamped.
    ///
    /// Returns `None` when the row is absent, foreign, or global.
    pub async fn update_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateMediaEntry,
    ) -> Result<Option<MediaEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE media_entries SET
                title = COALESCE($3, title),
                media_type = COALESCE($4, media_type),
                director = COALESCE($5, director),
                budget = COALESCE($6, budget),
                location = COALESCE($7, location),
                duration = COALESCE($8, duration),
                year = COALESCE($9, year),
                genre = COALESCE($10, genre),
                description = COALESCE($11, description),
                poster_url = COALESCE($12, poster_url),
                rating = COALESCE($13, rating),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND is_global = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(&input.director)
            .bind(&input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(&input.year)
            .bind(&input.genre)
            .bind(&input.description)
            .bind(&input.poster_url)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry from a user's personal collection.
    ///
    /// Returns `true` if a row was deleted. Global template rows are never
    /// deleted through this path.
    pub async fn delete_owned(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM media_entries WHERE id = $1 AND owner_id = $2 AND is_global = false",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Global pool (read side of seeding)
    // -----------------------------------------------------------------------

    /// List up to `limit` global template rows in stable id order.
    pub async fn list_global(pool: &PgPool, limit: i64) -> Result<Vec<MediaEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_entries
             WHERE is_global = true
             ORDER BY id
             LIMIT $1"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of global template rows.
    pub async fn count_global(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM media_entries WHERE is_global = true")
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Titles from `titles` that the user already has in their personal
    /// collection. Used by seeding to skip works the user owns.
    pub async fn owned_titles_among(
        pool: &PgPool,
        owner_id: DbId,
        titles: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT title FROM media_entries
             WHERE owner_id = $1 AND is_global = false AND title = ANY($2)",
        )
        .bind(owner_id)
        .bind(titles)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    /// Bulk insert entries, silently skipping rows that collide with a
    /// unique constraint (`ON CONFLICT DO NOTHING`).
    ///
    /// Returns the number of rows actually inserted. A partial race with a
    /// concurrent writer therefore shrinks the count instead of failing the
    /// whole batch.
    pub async fn insert_skip_duplicates(
        pool: &PgPool,
        entries: &[NewMediaEntry],
    ) -> Result<u64, sqlx::Error> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut builder = sqlx::QueryBuilder::new(
            "INSERT INTO media_entries
                (owner_id, title, media_type, director, budget, location, duration,
                 year, genre, description, poster_url, rating, is_global, global_source_id) ",
        );
        builder.push_values(entries, |mut row, entry| {
            row.push_bind(entry.owner_id)
                .push_bind(&entry.title)
                .push_bind(entry.media_type)
                .push_bind(&entry.director)
                .push_bind(&entry.budget)
                .push_bind(&entry.location)
                .push_bind(&entry.duration)
                .push_bind(&entry.year)
                .push_bind(&entry.genre)
                .push_bind(&entry.description)
                .push_bind(&entry.poster_url)
                .push_bind(entry.rating)
                .push_bind(entry.is_global)
                .push_bind(entry.global_source_id);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }
}
