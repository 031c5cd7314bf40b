mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

/// Build a test server with the link management API mounted under `/api`,
/// mirroring the production router.
fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api", linkcut::api::routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_link_with_generated_code(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com/some/page" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["target"], "https://example.com/some/page");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_create_link_with_custom_code(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"], "abc123");

    // Round-trip: the created record is retrievable by its code.
    let response = server.get("/api/links/abc123").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["target"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
}

#[sqlx::test]
async fn test_create_link_missing_target(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.post("/api/links").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_link_invalid_target(pool: SqlitePool) {
    let server = make_server(pool);

    for target in ["not-a-url", "ftp://example.com/file", "example.com"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "target": target }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_create_link_invalid_custom_code(pool: SqlitePool) {
    let server = make_server(pool);

    for code in ["abc", "abcd12345", "abc-12", "abc 12"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "target": "https://example.com", "code": code }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_create_link_duplicate_code(pool: SqlitePool) {
    let server = make_server(pool);

    let first = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "dup001" }))
        .await;
    first.assert_status(axum::http::StatusCode::CREATED);

    let second = server
        .post("/api/links")
        .json(&json!({ "target": "https://other.com", "code": "dup001" }))
        .await;
    second.assert_status(axum::http::StatusCode::CONFLICT);

    let body = second.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_links_newest_first(pool: SqlitePool) {
    common::create_test_link(&pool, "first1", "https://example.com/1").await;
    common::create_test_link(&pool, "second", "https://example.com/2").await;
    common::create_test_link(&pool, "third3", "https://example.com/3").await;

    let server = make_server(pool);
    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["code"].as_str().unwrap())
        .collect();

    assert_eq!(codes, vec!["third3", "second", "first1"]);
}

#[sqlx::test]
async fn test_list_links_empty(pool: SqlitePool) {
    let server = make_server(pool);
    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

// ─── GET (single) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_link_is_idempotent(pool: SqlitePool) {
    common::create_test_link(&pool, "same01", "https://example.com").await;

    let server = make_server(pool);

    let first = server.get("/api/links/same01").await;
    let second = server.get("/api/links/same01").await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(
        first.json::<serde_json::Value>(),
        second.json::<serde_json::Value>()
    );
}

#[sqlx::test]
async fn test_get_link_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/api/links/absent0").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_get_link_malformed_code(pool: SqlitePool) {
    let server = make_server(pool);

    // Too short for a code: rejected before storage is consulted.
    let response = server.get("/api/links/abc").await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_link_then_get(pool: SqlitePool) {
    common::create_test_link(&pool, "del001", "https://example.com").await;

    let server = make_server(pool);

    server
        .delete("/api/links/del001")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server.get("/api/links/del001").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.delete("/api/links/absent0").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_link_malformed_code(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.delete("/api/links/way-too-long-code").await;

    response.assert_status_bad_request();
}
