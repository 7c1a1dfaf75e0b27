//! # 메모 데이터베이스 쿼리 모듈
//!
//! `Repository<Note>`의 기본 CRUD에 검색 기능을 덧붙입니다.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::repository::{Entity, Repository, SqliteQuery};
use crate::error::AppError;
use crate::models::*;

impl Entity for Note {
    const TABLE: &'static str = "notes";
    const LABEL: &'static str = "Note";
    const COLUMNS: &'static [&'static str] = &["title", "content"];

    type Create = CreateNoteRequest;
    type Update = UpdateNoteRequest;

    fn from_create(id: String, now: DateTime<Utc>, payload: &CreateNoteRequest) -> Self {
        Self {
            id,
            title: payload.title.clone(),
            content: payload.content.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, payload: &UpdateNoteRequest) {
        if let Some(title) = &payload.title {
            self.title = title.clone();
        }
        // Some(None)이면 본문을 NULL로 지웁니다.
        if let Some(content) = &payload.content {
            self.content = content.clone();
        }
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.title).bind(&self.content)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// 메모 저장소
///
/// 기본 CRUD는 `Repository<Note>`에 그대로 위임합니다.
/// 메모에는 유일성 조건이 없으므로 생성/수정에 사전 검사가 없습니다.
#[derive(Clone)]
pub struct NoteRepository {
    base: Repository<Note>,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Note>, AppError> {
        self.base.get(id).await
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Note>, AppError> {
        self.base.list(skip, limit).await
    }

    pub async fn create(&self, payload: &CreateNoteRequest) -> Result<Note, AppError> {
        self.base.create(payload).await
    }

    pub async fn update(&self, existing: Note, payload: &UpdateNoteRequest) -> Result<Note, AppError> {
        self.base.update(existing, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<Note>, AppError> {
        self.base.delete(id).await
    }

    /// 제목이 정확히 일치하는 메모 하나를 찾습니다.
    pub async fn get_by_title(&self, title: &str) -> Result<Option<Note>, AppError> {
        self.base.find_by("title", title).await
    }

    /// 제목 또는 본문에 `query`가 포함된 메모를 찾습니다 (대소문자 무시).
    ///
    /// SQLite의 `LIKE`/`lower()`는 ASCII만 대소문자를 무시하므로
    /// ("Еда"와 "еда"를 같게 보지 않음) 비교는 Rust 쪽에서 유니코드 소문자로 합니다.
    /// 결과는 삽입 순서이며 `skip`/`limit`은 일치한 메모들에 적용됩니다.
    pub async fn search(&self, query: &str, skip: i64, limit: i64) -> Result<Vec<Note>, AppError> {
        let needle = query.to_lowercase();
        let matches = |note: &Note| {
            note.title.to_lowercase().contains(&needle)
                || note
                    .content
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        };

        let notes = self
            .base
            .all()
            .await?
            .into_iter()
            .filter(|note| matches(note))
            .skip(usize::try_from(skip).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();

        Ok(notes)
    }
}
