//! Starter-collection seeding.
//!
//! New users get a copy of the global template catalog in their personal
//! collection. [`seed_user_collection`] is the single entry point; it is
//! gated by the per-user `is_seeded` flag unless forced, deduplicates by
//! title against entries the user already owns, and tolerates duplicate-key
//! collisions from concurrent runs.
//!
//! Error policy is the caller's: this module propagates persistence errors,
//! and the trigger decides whether to swallow them (registration/login) or
//! surface them (the on-demand endpoint). The one exception is catalog
//! bootstrapping, which is best-effort and only ever logs.

pub mod catalog;

use std::collections::HashSet;

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::media_entry::NewMediaEntry;
use crate::repositories::{MediaRepo, UserRepo};
use catalog::STARTER_CATALOG;

/// Upper bound on global entries fetched per seeding pass.
pub const GLOBAL_POOL_LIMIT: i64 = 20;

/// Outcome of a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// The non-forced gate found `is_seeded` already set; nothing was done.
    pub already_seeded: bool,
    /// Rows actually inserted into the user's collection.
    pub entries_copied: u64,
}

impl SeedReport {
    fn skipped() -> Self {
        Self {
            already_seeded: true,
            entries_copied: 0,
        }
    }
}

/// Copy global catalog entries into `user_id`'s personal collection.
///
/// Steps:
/// 1. Unless `force`, return early when the user's `is_seeded` flag is set.
/// 2. Fetch up to [`GLOBAL_POOL_LIMIT`] global entries; if the pool is empty,
///    bootstrap the starter catalog and fetch again.
/// 3. Skip every global entry whose title the user already owns.
/// 4. Bulk-insert the remaining copies, skipping duplicate-key collisions.
/// 5. Unconditionally mark the user as seeded, even when nothing was copied.
///
/// Global rows are only ever read. The gate check and the final flag write
/// are not one atomic transaction; two concurrent passes may both copy, and
/// the unique indexes plus `ON CONFLICT DO NOTHING` keep that harmless.
pub async fn seed_user_collection(
    pool: &PgPool,
    user_id: DbId,
    force: bool,
) -> Result<SeedReport, sqlx::Error> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    if user.is_seeded && !force {
        tracing::debug!(user_id, "User already seeded, skipping");
        return Ok(SeedReport::skipped());
    }

    let mut global_pool = MediaRepo::list_global(pool, GLOBAL_POOL_LIMIT).await?;
    if global_pool.is_empty() {
        ensure_global_catalog(pool, user_id).await;
        global_pool = MediaRepo::list_global(pool, GLOBAL_POOL_LIMIT).await?;
    }

    let copies = dedup_copies(pool, user_id, &global_pool).await?;
    let entries_copied = MediaRepo::insert_skip_duplicates(pool, &copies).await?;

    // The flag is set even when the pool was empty or everything was a
    // duplicate: a completed pass is a completed pass.
    UserRepo::mark_seeded(pool, user_id).await?;

    tracing::info!(
        user_id,
        entries_copied,
        pool_size = global_pool.len(),
        "Seeded user collection"
    );

    Ok(SeedReport {
        already_seeded: false,
        entries_copied,
    })
}

/// Build copies of every global entry whose title the user does not already
/// own. Title equality is the dedup key: copies are detached from their
/// source, so the title is the only stable cross-user comparison left.
async fn dedup_copies(
    pool: &PgPool,
    user_id: DbId,
    global_pool: &[crate::models::media_entry::MediaEntry],
) -> Result<Vec<NewMediaEntry>, sqlx::Error> {
    if global_pool.is_empty() {
        return Ok(Vec::new());
    }

    let pool_titles: Vec<String> = global_pool.iter().map(|e| e.title.clone()).collect();
    let existing: HashSet<String> = MediaRepo::owned_titles_among(pool, user_id, &pool_titles)
        .await?
        .into_iter()
        .collect();

    Ok(global_pool
        .iter()
        .filter(|entry| !existing.contains(&entry.title))
        .map(|entry| NewMediaEntry::copy_of(entry, user_id))
        .collect())
}

/// Guarantee the global pool is non-empty before a copy pass.
///
/// Inserts the starter catalog (attributed to `attributed_to`, since every
/// row needs an owner) only when no global entries exist. Best-effort: any
/// failure is logged and swallowed, and the seeding pass simply proceeds
/// with whatever global rows are present.
pub async fn ensure_global_catalog(pool: &PgPool, attributed_to: DbId) {
    match MediaRepo::count_global(pool).await {
        Ok(0) => {}
        Ok(_) => return,
        Err(err) => {
            tracing::warn!(error = %err, "Global catalog count failed, skipping bootstrap");
            return;
        }
    }

    let defaults: Vec<NewMediaEntry> = STARTER_CATALOG
        .iter()
        .map(|entry| NewMediaEntry {
            owner_id: attributed_to,
            title: entry.title.to_string(),
            media_type: entry.media_type,
            director: entry.director.to_string(),
            budget: Some(entry.budget.to_string()),
            location: Some(entry.location.to_string()),
            duration: Some(entry.duration.to_string()),
            year: Some(entry.year.to_string()),
            genre: Some(entry.genre.to_string()),
            description: Some(entry.description.to_string()),
            poster_url: None,
            rating: entry.rating,
            is_global: true,
            global_source_id: None,
        })
        .collect();

    match MediaRepo::insert_skip_duplicates(pool, &defaults).await {
        Ok(inserted) => {
            tracing::info!(inserted, "Bootstrapped default global catalog");
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create default global entries");
        }
    }
}
