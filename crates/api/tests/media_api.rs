//! Integration tests for the `/api/v1/media` endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_seeded_user, delete_auth, get, get_auth, login_token,
    post_json_auth, put_json_auth,
};

/// Create a user whose collection starts empty and log them in.
async fn empty_collection_token(pool: &PgPool, email: &str) -> String {
    let app = build_test_app(pool.clone());
    create_seeded_user(pool, email).await;
    login_token(app, email).await
}

async fn create_entry(
    pool: &PgPool,
    token: &str,
    title: &str,
    media_type: &str,
) -> serde_json::Value {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/media",
        token,
        json!({
            "title": title,
            "media_type": media_type,
            "director": "Jane Doe",
            "genre": "Sci-Fi",
            "rating": 4,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_requires_auth(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/v1/media").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_entry_echoes_fields(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;

    let body = create_entry(&pool, &token, "Arrival", "movie").await;
    let entry = &body["data"];

    assert_eq!(entry["title"], "Arrival");
    assert_eq!(entry["media_type"], "movie");
    assert_eq!(entry["director"], "Jane Doe");
    assert_eq!(entry["rating"], 4);
    assert_eq!(entry["is_global"], false);
    assert_eq!(entry["global_source_id"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_entry_defaults_rating(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/media",
        &token,
        json!({ "title": "Dune", "media_type": "movie", "director": "Denis Villeneuve" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["rating"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_entry_validation(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;
    let app = build_test_app(pool.clone());

    // Empty title.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/media",
        &token,
        json!({ "title": "", "media_type": "movie", "director": "X" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Out-of-range rating.
    let response = post_json_auth(
        app,
        "/api/v1/media",
        &token,
        json!({ "title": "Dune", "media_type": "movie", "director": "X", "rating": 9 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_update_delete_cycle(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;

    let body = create_entry(&pool, &token, "Arrival", "movie").await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/media/{id}");

    // Read it back.
    let response = get_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update leaves other fields alone.
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        &token,
        json!({ "rating": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["rating"], 2);
    assert_eq!(body["data"]["title"], "Arrival");

    // Delete, then a second read is a 404.
    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entries_are_owner_scoped(pool: PgPool) {
    let ada = empty_collection_token(&pool, "ada@example.com").await;
    let bob = empty_collection_token(&pool, "bob@example.com").await;

    let body = create_entry(&pool, &ada, "Arrival", "movie").await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/media/{id}");

    // Another user's entry looks like it does not exist.
    let response = get_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(build_test_app(pool.clone()), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Bob's list stays empty.
    let response = get_auth(build_test_app(pool.clone()), "/api/v1/media", &bob).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination_shape(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;

    for i in 0..3 {
        create_entry(&pool, &token, &format!("Entry {i}"), "movie").await;
    }

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/media?page=1&limit=2",
        &token,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["total_count"], 3);
    assert_eq!(body["data"]["has_more"], true);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 2);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/media?page=2&limit=2",
        &token,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["has_more"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tolerates_huge_page_number(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;
    create_entry(&pool, &token, "Arrival", "movie").await;

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/media?page={}&limit=100", i64::MAX),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // A page far past the end is simply empty, not an error.
    let body = body_json(response).await;
    assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["has_more"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_search_and_type_filters(pool: PgPool) {
    let token = empty_collection_token(&pool, "ada@example.com").await;

    create_entry(&pool, &token, "Blade Runner", "movie").await;
    create_entry(&pool, &token, "Black Mirror", "tv_show").await;
    create_entry(&pool, &token, "The Matrix", "movie").await;

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/media?search=black",
        &token,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["entries"][0]["title"], "Black Mirror");

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/media?media_type=movie",
        &token,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_count"], 2);
}
