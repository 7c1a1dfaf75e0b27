//! # 사용자 데이터베이스 쿼리 모듈
//!
//! `users.email`, `users.username`에는 각각 UNIQUE 제약이 걸려 있습니다.
//!
//! 카테고리와 달리 중복 검사는 저장소 안에서 합니다.
//! `UserRepository`는 기본 `Repository<User>`의 `create`/`update`를 노출하지 않으므로
//! 사전 검사를 건너뛰고 사용자를 만들 방법이 없습니다.
//! (검사와 쓰기 사이의 경쟁은 UNIQUE 제약이 `Conflict`로 돌려줍니다.)

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::repository::{Entity, Repository, SqliteQuery};
use crate::error::AppError;
use crate::models::*;

impl Entity for User {
    const TABLE: &'static str = "users";
    const LABEL: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &["email", "username"];

    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    fn from_create(id: String, now: DateTime<Utc>, payload: &CreateUserRequest) -> Self {
        Self {
            id,
            email: payload.email.clone(),
            username: payload.username.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, payload: &UpdateUserRequest) {
        if let Some(email) = &payload.email {
            self.email = email.clone();
        }
        if let Some(username) = &payload.username {
            self.username = username.clone();
        }
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.email).bind(&self.username)
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

/// 이메일 중복 시 응답 메시지
pub const EMAIL_TAKEN: &str = "User with this email already exists";
pub const USERNAME_TAKEN: &str = "User with this username already exists";

/// 사용자 저장소
#[derive(Clone)]
pub struct UserRepository {
    base: Repository<User>,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, AppError> {
        self.base.get(id).await
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
        self.base.list(skip, limit).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<User>, AppError> {
        self.base.delete(id).await
    }

    /// 정규화된(도메인이 소문자인) 이메일로 찾습니다.
    /// 호출하는 쪽에서 `validate_email`을 거친 값을 넘겨야 합니다.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.base.find_by("email", email).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.base.find_by("username", username).await
    }

    /// email/username 중복을 먼저 확인한 뒤 생성합니다.
    pub async fn create(&self, payload: &CreateUserRequest) -> Result<User, AppError> {
        if self.get_by_email(&payload.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        if self.get_by_username(&payload.username).await?.is_some() {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        self.base.create(payload).await
    }

    /// 바뀌는 email/username이 다른 사용자와 겹치지 않는지 확인한 뒤 수정합니다.
    pub async fn update(&self, existing: User, payload: &UpdateUserRequest) -> Result<User, AppError> {
        if let Some(email) = payload.email.as_deref().filter(|e| *e != existing.email) {
            if let Some(other) = self.get_by_email(email).await? {
                if other.id != existing.id {
                    return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
                }
            }
        }
        if let Some(username) = payload.username.as_deref().filter(|u| *u != existing.username) {
            if let Some(other) = self.get_by_username(username).await? {
                if other.id != existing.id {
                    return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
                }
            }
        }

        self.base.update(existing, payload).await
    }
}
