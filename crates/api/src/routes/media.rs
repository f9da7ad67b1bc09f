//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /      -> list_entries
/// POST   /      -> create_entry
/// GET    /{id}  -> get_entry
/// PUT    /{id}  -> update_entry
/// DELETE /{id}  -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_entries).post(media::create_entry))
        .route(
            "/{id}",
            get(media::get_entry)
                .put(media::update_entry)
                .delete(media::delete_entry),
        )
}
