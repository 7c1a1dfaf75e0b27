//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite에 마이그레이션을 적용한 뒤, `main.rs`와 같은 `build_app`으로
//! 라우터를 만듭니다. 요청은 `tower::ServiceExt::oneshot`으로 직접 보냅니다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use finance_notes::{build_app, config::Config, db, state::AppState};

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        ..Config::default()
    }
}

/// 마이그레이션이 끝난 빈 인메모리 DB
pub async fn test_pool() -> SqlitePool {
    let pool = db::connect(&test_config())
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

pub async fn test_app() -> Router {
    build_app(AppState::new(test_pool().await), &test_config())
}

/// 요청을 보내고 (상태 코드, JSON 본문)을 반환합니다.
/// 본문이 비어 있거나 JSON이 아니면 `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
