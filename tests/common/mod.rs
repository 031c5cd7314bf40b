#![allow(dead_code)]

use chrono::Utc;
use linkcut::application::services::LinkService;
use linkcut::infrastructure::persistence::SqliteLinkRepository;
use linkcut::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(LinkService::new(link_repository)))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target, clicks, created_at) VALUES (?1, ?2, 0, ?3)")
        .bind(code)
        .bind(target)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn read_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn read_last_clicked(pool: &SqlitePool, code: &str) -> Option<String> {
    sqlx::query_scalar("SELECT last_clicked FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
