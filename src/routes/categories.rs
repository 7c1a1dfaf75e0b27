//! # 카테고리(Category) API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/categories?skip&limit | `list_categories` | 카테고리 목록 |
//! | POST | /api/v1/categories | `create_category` | 새 카테고리 생성 (201) |
//! | GET | /api/v1/categories/{id} | `get_category` | 카테고리 하나 조회 |
//! | GET | /api/v1/categories/name/{name} | `get_category_by_name` | 이름으로 조회 (없으면 `null`) |
//! | PUT, PATCH | /api/v1/categories/{id} | `update_category` | 카테고리 부분 수정 |
//! | DELETE | /api/v1/categories/{id} | `delete_category` | 카테고리 삭제 |
//!
//! ## 이름 유일성
//! 생성과 이름 변경 전에 같은 이름의 카테고리가 있는지 먼저 확인하고,
//! 있으면 쓰기를 시도하지 않고 400(Conflict)을 반환합니다.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    db::Entity,
    error::AppError,
    extract::{AppJson, AppQuery},
    models::*,
    state::AppState,
};

pub const CATEGORY_NAME_TAKEN: &str = "Category with this name already exists";

fn name_taken(name: &str) -> AppError {
    tracing::warn!(name, "category name already in use");
    AppError::Conflict(CATEGORY_NAME_TAKEN.to_string())
}

/// `GET /api/v1/categories?skip=0&limit=100` → `[Category, ...]`
pub async fn list_categories(
    State(state): State<AppState>,
    AppQuery(page): AppQuery<Pagination>,
) -> Result<Json<Vec<Category>>, AppError> {
    let page = page.validate()?;
    let categories = state.categories.list(page.skip, page.limit).await?;
    Ok(Json(categories))
}

/// `GET /api/v1/categories/{id}`
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .get(&id)
        .await?
        .ok_or_else(Category::not_found)?;
    Ok(Json(category))
}

/// `GET /api/v1/categories/name/{name}`
///
/// 찾지 못해도 404가 아니라 200 + `null`을 반환합니다.
pub async fn get_category_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Option<Category>>, AppError> {
    let category = state.categories.get_by_name(&name).await?;
    Ok(Json(category))
}

/// `POST /api/v1/categories` + `{ "name": "Еда", "color": "#FF5733" }` → `201 Created`
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let req = req.validate()?;

    if state.categories.get_by_name(&req.name).await?.is_some() {
        return Err(name_taken(&req.name));
    }

    let category = state.categories.create(&req).await?;
    tracing::info!(id = %category.id, name = %category.name, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT|PATCH /api/v1/categories/{id}`
///
/// 이름을 현재와 다른 값으로 바꾸는 경우에만 유일성을 다시 확인합니다.
/// 자기 자신과의 충돌은 무시합니다.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let req = req.validate()?;
    let category = state
        .categories
        .get(&id)
        .await?
        .ok_or_else(Category::not_found)?;

    if let Some(name) = req.name.as_deref().filter(|n| *n != category.name) {
        if let Some(existing) = state.categories.get_by_name(name).await? {
            if existing.id != category.id {
                return Err(name_taken(name));
            }
        }
    }

    let category = state.categories.update(category, &req).await?;
    tracing::info!(id = %category.id, "category updated");
    Ok(Json(category))
}

/// `DELETE /api/v1/categories/{id}` → 삭제 직전의 카테고리
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .delete(&id)
        .await?
        .ok_or_else(Category::not_found)?;
    tracing::info!(id = %category.id, "category deleted");
    Ok(Json(category))
}
