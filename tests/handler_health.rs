mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkcut::api::handlers::health_handler;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/healthz", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_seconds"].is_u64());
}
