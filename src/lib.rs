//! # finance-notes
//!
//! 개인 재무 메모(Note), 카테고리(Category), 사용자(User)를 관리하는 REST API.
//!
//! - `validators`: 필드 검증 함수 (HEX 색상, 이메일, 전화번호, 비밀번호, 범위, 길이)
//! - `models`: 엔티티와 요청 구조체
//! - `db`: 제네릭 저장소와 엔티티 전용 저장소
//! - `routes`: HTTP 핸들러
//!
//! `build_app`은 `main.rs`와 통합 테스트가 같은 라우터/미들웨어를 쓰도록 공유됩니다.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;
pub mod validators;

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use config::Config;
use state::AppState;

/// 라우터에 API 경로 접두사, CORS, 요청 로깅 미들웨어를 붙입니다.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let api = routes::api_routes().with_state(state);

    // axum 0.8은 루트("/")에 nest할 수 없으므로 접두사가 없으면 merge합니다.
    let router = match config.api_prefix.trim_end_matches('/') {
        "" => Router::new().merge(api),
        prefix => Router::new().nest(prefix, api),
    };

    router
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS 설정. 출처 목록이 비어 있거나 `*`가 있으면 모두 허용합니다.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
