//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/v1/health` → `{ "status": "ok", "version": "0.1.0", "database": "ok" }`
//!
//! 데이터베이스에 `SELECT 1`을 보내 연결 상태도 함께 보고합니다.
//! DB가 응답하지 않아도 서버 자체는 살아 있으므로 200을 반환합니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("health check: database unavailable: {}", e);
            "unavailable"
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    }))
}
