//! # 제네릭 저장소(Repository)
//!
//! 엔티티 종류와 상관없이 똑같은 CRUD 쿼리를 한 번만 구현합니다.
//! 엔티티마다 다른 부분(테이블 이름, 컬럼 목록, 요청 → 행 변환)은
//! `Entity` 트레이트로 분리하고, `Repository<E>`가 이를 이용해 SQL을 만듭니다.
//!
//! 엔티티 전용 저장소(`NoteRepository` 등)는 `Repository<E>`를 감싸서(composition)
//! 이름/이메일 조회나 검색 같은 기능을 덧붙입니다.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::error::AppError;

/// 바인딩 중인 SQLite 쿼리
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// 저장소가 다룰 수 있는 엔티티
///
/// 모든 테이블은 `id`, `created_at`, `updated_at`을 공통으로 가지며,
/// `COLUMNS`는 그 외 엔티티 고유 컬럼을 `bind_columns`와 같은 순서로 나열합니다.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// 테이블 이름 (예: "notes")
    const TABLE: &'static str;
    /// 사람이 읽는 엔티티 이름 (예: "Note"). 에러 메시지에 쓰입니다.
    const LABEL: &'static str;
    const COLUMNS: &'static [&'static str];

    type Create: Sync;
    type Update: Sync;

    /// 생성 요청으로부터 새 엔티티를 만듭니다. `created_at == updated_at == now`
    fn from_create(id: String, now: DateTime<Utc>, payload: &Self::Create) -> Self;

    /// 수정 요청에 포함된 필드만 덮어씁니다. `updated_at`은 저장소가 갱신합니다.
    fn apply_update(&mut self, payload: &Self::Update);

    /// `COLUMNS` 순서대로 값을 바인딩합니다.
    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    fn not_found() -> AppError {
        AppError::NotFound(format!("{} not found", Self::LABEL))
    }
}

/// `Entity` 하나에 대한 CRUD 저장소
///
/// `SqlitePool`은 내부적으로 Arc이므로 clone 비용이 거의 없습니다.
/// 각 쿼리는 풀에서 연결을 빌려 쓰고, 성공/실패와 관계없이 쿼리가 끝나면 반환합니다.
pub struct Repository<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// `SELECT id, <컬럼들>, created_at, updated_at FROM <테이블>`
    fn select_sql() -> String {
        format!(
            "SELECT id, {}, created_at, updated_at FROM {}",
            E::COLUMNS.join(", "),
            E::TABLE
        )
    }

    /// ID로 한 행을 조회합니다. 없으면 `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<E>, AppError> {
        let sql = format!("{} WHERE id = ?", Self::select_sql());
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// 삽입 순서(rowid)대로 `skip`개를 건너뛰고 최대 `limit`개를 반환합니다.
    ///
    /// 범위 검사는 경계 계층(핸들러)의 책임입니다.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<E>, AppError> {
        let sql = format!("{} ORDER BY rowid LIMIT ? OFFSET ?", Self::select_sql());
        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// 모든 행을 삽입 순서대로 반환합니다.
    pub async fn all(&self) -> Result<Vec<E>, AppError> {
        let sql = format!("{} ORDER BY rowid", Self::select_sql());
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;

        Ok(rows)
    }

    /// 고유 컬럼 하나로 정확히 일치하는 행을 찾습니다.
    ///
    /// `column`은 반드시 `E::COLUMNS` 중 하나여야 합니다 (SQL에 그대로 들어갑니다).
    pub async fn find_by(&self, column: &'static str, value: &str) -> Result<Option<E>, AppError> {
        debug_assert!(E::COLUMNS.contains(&column), "unknown column {column}");

        let sql = format!("{} WHERE {} = ?", Self::select_sql(), column);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// 새 행을 만들고 저장된 엔티티를 반환합니다.
    ///
    /// ## 처리 흐름
    /// 1. UUIDv7으로 ID 생성, `created_at == updated_at == 지금`
    /// 2. INSERT (UNIQUE 제약 위반은 `AppError::Conflict`)
    /// 3. 방금 만든 행을 다시 조회하여 반환
    pub async fn create(&self, payload: &E::Create) -> Result<E, AppError> {
        let id = uuid::Uuid::now_v7().to_string();
        let entity = E::from_create(id, Utc::now(), payload);

        let placeholders = vec!["?"; E::COLUMNS.len() + 3].join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}, created_at, updated_at) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );

        let query = sqlx::query(&sql).bind(entity.id());
        entity
            .bind_columns(query)
            .bind(entity.created_at())
            .bind(entity.updated_at())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(E::LABEL, e))?;

        self.get(entity.id()).await?.ok_or_else(|| {
            AppError::Internal(format!("Failed to retrieve created {}", E::TABLE))
        })
    }

    /// 기존 엔티티에 수정 요청을 적용하고 저장합니다.
    ///
    /// 요청에 없는 필드는 그대로 유지되고, `updated_at`만 앞으로 갑니다.
    /// (시계가 뒤로 가더라도 이전 값보다 작아지지 않습니다.)
    pub async fn update(&self, mut existing: E, payload: &E::Update) -> Result<E, AppError> {
        existing.apply_update(payload);
        let now = Utc::now().max(existing.updated_at());
        existing.set_updated_at(now);

        let assignments: Vec<String> = E::COLUMNS.iter().map(|c| format!("{c} = ?")).collect();
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ? WHERE id = ?",
            E::TABLE,
            assignments.join(", ")
        );

        let result = existing
            .bind_columns(sqlx::query(&sql))
            .bind(existing.updated_at())
            .bind(existing.id())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(E::LABEL, e))?;

        // 조회와 수정 사이에 다른 요청이 삭제한 경우
        if result.rows_affected() == 0 {
            return Err(E::not_found());
        }

        self.get(existing.id()).await?.ok_or_else(E::not_found)
    }

    /// ID로 행을 삭제하고, 삭제 직전의 엔티티를 반환합니다.
    ///
    /// 해당 ID가 없으면 아무것도 하지 않고 `Ok(None)`을 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<Option<E>, AppError> {
        let Some(entity) = self.get(id).await? else {
            return Ok(None);
        };

        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(entity))
    }
}
