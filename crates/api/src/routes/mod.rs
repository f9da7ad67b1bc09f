pub mod auth;
pub mod health;
pub mod media;
pub mod seed;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register      register (public)
/// /auth/login         login (public)
/// /auth/refresh       refresh (public)
/// /auth/logout        logout (requires auth)
/// /auth/me            current user (requires auth)
///
/// /media              list, create (requires auth)
/// /media/{id}         get, update, delete (requires auth)
///
/// /seed               seed own collection on demand (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/media", media::router())
        .merge(seed::router())
}
