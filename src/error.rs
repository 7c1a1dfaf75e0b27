//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{ "detail": ..., "code": ... }` HTTP 응답으로 자동 변환
//! - 추출자(Json, Query) 거부(rejection)도 `AppError`로 변환하여 응답 형태를 통일

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validators::ValidationError;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    /// 메시지에 어떤 엔티티를 찾지 못했는지 담습니다. 예: "Note not found"
    #[error("{0}")]
    NotFound(String),

    /// 유일성(uniqueness) 제약 위반 (HTTP 400)
    /// 쓰기는 시도되지 않았거나, 저장소의 UNIQUE 제약에 의해 거부되었습니다.
    #[error("{0}")]
    Conflict(String),

    /// 필드 검증 실패 (HTTP 422)
    /// #[from]: ValidationError에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// 잘못된 요청 (HTTP 400): 본문을 끝까지 읽지 못한 경우 등
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx::Error → AppError::Database 자동 변환
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 저장소 쓰기 에러를 분류합니다.
    ///
    /// UNIQUE 제약 위반은 `Conflict`로, 나머지는 `Database`로 변환합니다.
    /// 애플리케이션 수준의 사전 검사와 실제 쓰기 사이에서 경쟁(race)이 발생해도
    /// 클라이언트는 500 대신 깔끔한 충돌 응답을 받게 됩니다.
    pub fn from_write(entity: &str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                // SQLite 메시지 형식: "UNIQUE constraint failed: categories.name"
                let field = db_err
                    .message()
                    .rsplit('.')
                    .next()
                    .unwrap_or("value")
                    .to_string();
                return AppError::Conflict(format!(
                    "{entity} with this {field} already exists"
                ));
            }
        }
        AppError::Database(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // 본문이 스키마로 파싱되지 않으면 모두 검증 실패(422):
        // 필드 누락/타입 불일치, 깨진 JSON, Content-Type 누락
        let unparseable = matches!(
            rejection,
            JsonRejection::JsonDataError(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::MissingJsonContentType(_)
        );

        if unparseable {
            AppError::Validation(ValidationError::new(rejection.body_text()))
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationError::new(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Conflict(ref msg) => (StatusCode::BAD_REQUEST, "conflict", msg.clone()),
            AppError::Validation(ref e) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", e.to_string())
            }
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        // 결과: { "detail": "Note not found", "code": "not_found" }
        let body = Json(json!({
            "detail": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
