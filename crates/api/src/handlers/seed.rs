//! Handler for the on-demand `/seed` trigger.
//!
//! Unlike the implicit registration/login trigger, this path surfaces
//! seeding failures to the caller: an unexpected persistence error becomes
//! a 500 response instead of a log line.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use reelbase_core::types::DbId;
use reelbase_db::seed::seed_user_collection;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::SeedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `POST /seed`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub user_id: DbId,
    /// Rows copied in this pass; 0 when the gate short-circuited or every
    /// title was already present.
    pub entries_copied: u64,
}

/// POST /api/v1/seed?force=true|false
///
/// Seed the authenticated user's collection on demand. With `force=true`
/// the "already seeded" gate is bypassed and the copy logic re-runs.
pub async fn seed_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SeedParams>,
) -> AppResult<impl IntoResponse> {
    let report = seed_user_collection(&state.pool, auth.user_id, params.force).await?;

    let message = if report.already_seeded {
        "User collection already seeded"
    } else {
        "User collection seeded successfully"
    };

    tracing::info!(
        user_id = auth.user_id,
        force = params.force,
        entries_copied = report.entries_copied,
        "On-demand seed completed"
    );

    Ok(Json(DataResponse {
        data: SeedResponse {
            message,
            user_id: auth.user_id,
            entries_copied: report.entries_copied,
        },
    }))
}
