//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! `categories.name`에는 UNIQUE 제약이 걸려 있습니다.
//! 핸들러는 쓰기 전에 `get_by_name`으로 먼저 확인하고,
//! 그 사이에 경쟁이 생기면 저장소가 UNIQUE 위반을 `Conflict`로 돌려줍니다.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::repository::{Entity, Repository, SqliteQuery};
use crate::error::AppError;
use crate::models::*;

impl Entity for Category {
    const TABLE: &'static str = "categories";
    const LABEL: &'static str = "Category";
    const COLUMNS: &'static [&'static str] = &["name", "color"];

    type Create = CreateCategoryRequest;
    type Update = UpdateCategoryRequest;

    fn from_create(id: String, now: DateTime<Utc>, payload: &CreateCategoryRequest) -> Self {
        Self {
            id,
            name: payload.name.clone(),
            color: payload.color.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, payload: &UpdateCategoryRequest) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(color) = &payload.color {
            self.color = color.clone();
        }
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.name).bind(&self.color)
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

/// 카테고리 저장소
///
/// 이름 중복 검사는 핸들러가 먼저 하고, 남은 경쟁은 UNIQUE 제약이 막습니다.
#[derive(Clone)]
pub struct CategoryRepository {
    base: Repository<Category>,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Category>, AppError> {
        self.base.get(id).await
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Category>, AppError> {
        self.base.list(skip, limit).await
    }

    pub async fn create(&self, payload: &CreateCategoryRequest) -> Result<Category, AppError> {
        self.base.create(payload).await
    }

    pub async fn update(
        &self,
        existing: Category,
        payload: &UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        self.base.update(existing, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<Category>, AppError> {
        self.base.delete(id).await
    }

    /// 이름이 정확히 일치하는 카테고리를 찾습니다.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        self.base.find_by("name", name).await
    }
}
