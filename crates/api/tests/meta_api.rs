//! HTTP-level integration tests for the meta endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, TestApp};
use flashcard_core::meta::{DEFAULT_GROUPS, DEFAULT_TAGS};
use flashcard_db::repositories::MetaRepo;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_before_any_post_returns_seeded_defaults(pool: SqlitePool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/api/meta").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"groups": DEFAULT_GROUPS, "tags": DEFAULT_TAGS}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_repeated_gets_keep_one_record(pool: SqlitePool) {
    let app = TestApp::new(pool.clone());
    for _ in 0..3 {
        get(app.router(), "/api/meta").await;
    }
    assert_eq!(MetaRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_post_replaces_only_present_lists(pool: SqlitePool) {
    let app = TestApp::new(pool);

    let response = post_json(app.router(), "/api/meta", json!({"groups": ["Inbox", "Done"]})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Updated"}));

    let json = body_json(get(app.router(), "/api/meta").await).await;
    assert_eq!(json["groups"], json!(["Inbox", "Done"]));
    assert_eq!(json["tags"], json!(DEFAULT_TAGS));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_post_both_lists(pool: SqlitePool) {
    let app = TestApp::new(pool);

    post_json(
        app.router(),
        "/api/meta",
        json!({"groups": ["g"], "tags": ["t1", "t2"]}),
    )
    .await;

    let json = body_json(get(app.router(), "/api/meta").await).await;
    assert_eq!(json, json!({"groups": ["g"], "tags": ["t1", "t2"]}));
}
