//! # 메모(Note) API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/notes?skip&limit | `list_notes` | 메모 목록 (페이지네이션) |
//! | GET | /api/v1/notes/search?q&skip&limit | `search_notes` | 제목/본문 검색 |
//! | POST | /api/v1/notes | `create_note` | 새 메모 생성 (201) |
//! | GET | /api/v1/notes/{id} | `get_note` | 메모 하나 조회 |
//! | PUT, PATCH | /api/v1/notes/{id} | `update_note` | 메모 부분 수정 |
//! | DELETE | /api/v1/notes/{id} | `delete_note` | 메모 삭제 (삭제된 메모 반환) |
//!
//! 메모 생성에는 유일성 조건이 없습니다.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    db::Entity,
    error::AppError,
    extract::{AppJson, AppQuery},
    models::*,
    state::AppState,
    validators::ValidationError,
};

/// `GET /api/v1/notes?skip=0&limit=100` → `[Note, ...]`
pub async fn list_notes(
    State(state): State<AppState>,
    AppQuery(page): AppQuery<Pagination>,
) -> Result<Json<Vec<Note>>, AppError> {
    let page = page.validate()?;
    let notes = state.notes.list(page.skip, page.limit).await?;
    Ok(Json(notes))
}

/// 검색 쿼리 파라미터
///
/// `#[serde(flatten)]`은 쿼리 문자열의 숫자 파싱과 함께 쓸 수 없어서
/// 페이지네이션 필드를 직접 나열합니다.
#[derive(Debug, Deserialize)]
pub struct NoteSearchQuery {
    pub q: String,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// `GET /api/v1/notes/search?q=молоко` → `[Note, ...]`
///
/// 빈 검색어(공백만 있는 경우 포함)는 422로 거부합니다.
pub async fn search_notes(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<NoteSearchQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    if query.q.trim().is_empty() {
        return Err(ValidationError::new("search query cannot be empty")
            .in_field("q")
            .into());
    }

    let page = Pagination {
        skip: query.skip,
        limit: query.limit,
    }
    .validate()?;

    let notes = state.notes.search(&query.q, page.skip, page.limit).await?;
    Ok(Json(notes))
}

/// `GET /api/v1/notes/{id}`
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let note = state.notes.get(&id).await?.ok_or_else(Note::not_found)?;
    Ok(Json(note))
}

/// `POST /api/v1/notes` + `{ "title": "...", "content": "..." }` → `201 Created`
pub async fn create_note(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let req = req.validate()?;
    let note = state.notes.create(&req).await?;
    tracing::info!(id = %note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// `PUT|PATCH /api/v1/notes/{id}`: 보낸 필드만 변경합니다.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    let req = req.validate()?;
    let note = state.notes.get(&id).await?.ok_or_else(Note::not_found)?;

    let note = state.notes.update(note, &req).await?;
    tracing::info!(id = %note.id, "note updated");
    Ok(Json(note))
}

/// `DELETE /api/v1/notes/{id}` → 삭제 직전의 메모
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let note = state.notes.delete(&id).await?.ok_or_else(Note::not_found)?;
    tracing::info!(id = %note.id, "note deleted");
    Ok(Json(note))
}
