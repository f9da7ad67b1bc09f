//! Route definition for the on-demand seed trigger.

use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST /seed  -> seed_collection (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed::seed_collection))
}
