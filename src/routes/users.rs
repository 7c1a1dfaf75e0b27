//! # 사용자(User) API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/users?skip&limit | `list_users` | 사용자 목록 |
//! | GET | /api/v1/users/email/{email} | `get_user_by_email` | 이메일로 조회 (없으면 `null`) |
//! | GET | /api/v1/users/username/{username} | `get_user_by_username` | 사용자명으로 조회 (없으면 `null`) |
//! | POST | /api/v1/users | `create_user` | 새 사용자 생성 (201) |
//! | GET | /api/v1/users/{id} | `get_user` | 사용자 하나 조회 |
//! | PUT, PATCH | /api/v1/users/{id} | `update_user` | 사용자 부분 수정 |
//! | DELETE | /api/v1/users/{id} | `delete_user` | 사용자 삭제 |
//!
//! email, username 유일성 검사는 `UserRepository`가 담당합니다.

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
    validators::validate_email,
};

/// `GET /api/v1/users?skip=0&limit=100`
pub async fn list_users(
    State(state): State<AppState>,
    AppQuery(page): AppQuery<Pagination>,
) -> Result<Json<Vec<User>>, AppError> {
    let page = page.validate()?;
    let users = state.users.list(page.skip, page.limit).await?;
    Ok(Json(users))
}

/// `GET /api/v1/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.get(&id).await?.ok_or_else(User::not_found)?;
    Ok(Json(user))
}

/// `GET /api/v1/users/email/{email}`: 없으면 `null`
///
/// 저장된 이메일은 도메인이 소문자로 정규화되어 있으므로, 조회할 주소도
/// 같은 방식으로 정규화합니다. (`bob@Example.com` → `bob@example.com`)
/// 이메일 형식이 아니면 그런 사용자는 있을 수 없으므로 `null`을 돌려줍니다.
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, AppError> {
    let Ok(email) = validate_email(&email) else {
        return Ok(Json(None));
    };

    let user = state.users.get_by_email(&email).await?;
    Ok(Json(user))
}

/// `GET /api/v1/users/username/{username}`: 없으면 `null`
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Option<User>>, AppError> {
    let user = state.users.get_by_username(&username).await?;
    Ok(Json(user))
}

/// `POST /api/v1/users` + `{ "email": "...", "username": "..." }` → `201 Created`
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let req = req.validate()?;
    let user = state.users.create(&req).await.inspect_err(|e| {
        if let AppError::Conflict(msg) = e {
            tracing::warn!("user not created: {}", msg);
        }
    })?;
    tracing::info!(id = %user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT|PATCH /api/v1/users/{id}`: 보낸 필드만 변경합니다.
///
/// 새 이메일도 생성 때와 같이 정규화된 뒤 중복 검사를 받습니다.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    let req = req.validate()?;
    let user = state.users.get(&id).await?.ok_or_else(User::not_found)?;

    let user = state.users.update(user, &req).await?;
    tracing::info!(id = %user.id, "user updated");
    Ok(Json(user))
}

/// `DELETE /api/v1/users/{id}` → 삭제 직전의 사용자
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.delete(&id).await?.ok_or_else(User::not_found)?;
    tracing::info!(id = %user.id, "user deleted");
    Ok(Json(user))
}
