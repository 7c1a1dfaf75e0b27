//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `notes`: 메모 CRUD + 검색
//! - `categories`: 카테고리 CRUD + 이름 조회
//! - `users`: 사용자 CRUD + email/username 조회
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod categories;
pub mod health;
pub mod notes;
pub mod users;

pub use categories::*;
pub use health::*;
pub use notes::*;
pub use users::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// API 라우트 전체. `/api/v1` 같은 접두사는 호출하는 쪽에서 `nest`합니다.
///
/// 경로 파라미터는 axum 0.8 문법(`{id}`)을 사용합니다.
/// 고정 경로(`/notes/search`, `/categories/name/{name}`)는 `{id}`보다 우선 매칭됩니다.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 메모(Note)
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/search", get(search_notes))
        .route(
            "/notes/{id}",
            get(get_note)
                .put(update_note)
                .patch(update_note)
                .delete(delete_note),
        )
        // 카테고리(Category)
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/name/{name}", get(get_category_by_name))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .patch(update_category)
                .delete(delete_category),
        )
        // 사용자(User)
        .route("/users", get(list_users).post(create_user))
        .route("/users/email/{email}", get(get_user_by_email))
        .route("/users/username/{username}", get(get_user_by_username))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/health", get(health_check))
}
