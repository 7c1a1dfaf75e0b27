//! # 초기 데이터(seed) 모듈
//!
//! 빈 데이터베이스에 예시 카테고리와 메모를 채워 넣습니다.
//! 서버 시작 시 `SEED_ON_STARTUP` 설정에 따라 `main.rs`에서 호출됩니다.
//!
//! - `seed_if_empty`: 카테고리와 메모가 하나도 없을 때만 채웁니다.
//! - `seed_database(pool, true)`: 기존 카테고리/메모를 지우고 다시 채웁니다.
//!
//! 사용자(users)는 건드리지 않습니다.
//! 모든 행은 저장소(`CategoryRepository`, `NoteRepository`)를 통해 만들어지므로
//! 요청으로 만든 행과 똑같이 검증을 거치고 ID/시각이 부여됩니다.

use sqlx::SqlitePool;

use super::{CategoryRepository, NoteRepository};
use crate::error::AppError;
use crate::models::*;

/// (이름, 색상)
const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("🍔 Еда", "#FF5733"),
    ("🚗 Транспорт", "#33FF57"),
    ("🏠 Жилье", "#3357FF"),
    ("💼 Работа", "#F5FF33"),
    ("🎯 Развлечения", "#FF33F5"),
    ("🏥 Здоровье", "#33FFF5"),
    ("📚 Образование", "#F533FF"),
    ("👕 Одежда", "#FF8C33"),
    ("🎁 Подарки", "#33FF8C"),
    ("✈️ Путешествия", "#8C33FF"),
];

/// (제목, 본문)
const SEED_NOTES: &[(&str, &str)] = &[
    ("Продукты на неделю", "Молоко, хлеб, яйца, овощи, фрукты, мясо, рыба"),
    ("Заправка автомобиля", "Бензин на неделю, масло, мойка"),
    ("Оплата коммунальных услуг", "Электричество, вода, газ, интернет за ноябрь"),
    ("Зарплата за ноябрь", "Основная зарплата + премия за проект"),
    ("Билеты в кино", "На фильм 'Мстители' на субботу вечером"),
    ("Визит к стоматологу", "Плановый осмотр, чистка зубов"),
    ("Книги по программированию", "'Чистая архитектура', 'Python Cookbook'"),
    ("Зимняя одежда", "Куртка, шапка, перчатки на зиму"),
    ("Подарок маме", "Цветы, конфеты, открытка на день рождения"),
    ("Билеты на Бали", "Авиабилеты, отель, страховка на февраль"),
];

/// 한 번의 seed 실행 결과
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub notes_created: usize,
}

pub async fn seed_categories(repo: &CategoryRepository) -> Result<Vec<Category>, AppError> {
    let mut categories = Vec::with_capacity(SEED_CATEGORIES.len());
    for (name, color) in SEED_CATEGORIES {
        let req = CreateCategoryRequest {
            name: name.to_string(),
            color: color.to_string(),
        }
        .validate()?;
        categories.push(repo.create(&req).await?);
    }
    Ok(categories)
}

pub async fn seed_notes(repo: &NoteRepository) -> Result<Vec<Note>, AppError> {
    let mut notes = Vec::with_capacity(SEED_NOTES.len());
    for (title, content) in SEED_NOTES {
        let req = CreateNoteRequest {
            title: title.to_string(),
            content: Some(content.to_string()),
        }
        .validate()?;
        notes.push(repo.create(&req).await?);
    }
    Ok(notes)
}

/// 카테고리와 메모를 채웁니다.
///
/// `clear_existing`이면 기존 메모와 카테고리를 먼저 모두 삭제합니다.
/// 지우지 않고 이미 같은 이름의 카테고리가 있으면 `Conflict`로 실패합니다.
pub async fn seed_database(pool: &SqlitePool, clear_existing: bool) -> Result<SeedReport, AppError> {
    if clear_existing {
        tracing::info!("Clearing existing notes and categories");
        sqlx::query("DELETE FROM notes").execute(pool).await?;
        sqlx::query("DELETE FROM categories").execute(pool).await?;
    }

    let categories = seed_categories(&CategoryRepository::new(pool.clone())).await?;
    let notes = seed_notes(&NoteRepository::new(pool.clone())).await?;

    let report = SeedReport {
        categories_created: categories.len(),
        notes_created: notes.len(),
    };
    tracing::info!(
        categories = report.categories_created,
        notes = report.notes_created,
        "Database seeded"
    );
    Ok(report)
}

/// 카테고리와 메모가 모두 0개인지 확인합니다.
pub async fn is_database_empty(pool: &SqlitePool) -> Result<bool, AppError> {
    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    let notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await?;

    Ok(categories == 0 && notes == 0)
}

/// 비어 있을 때만 채웁니다. 실제로 채웠으면 `Some(report)`.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<Option<SeedReport>, AppError> {
    if !is_database_empty(pool).await? {
        tracing::info!("Database already has data, skipping seed");
        return Ok(None);
    }

    seed_database(pool, false).await.map(Some)
}
