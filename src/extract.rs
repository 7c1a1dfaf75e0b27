//! # 커스텀 추출자(Extractor)
//!
//! axum 기본 `Json`/`Query`는 파싱 실패 시 일반 텍스트 응답을 돌려줍니다.
//! 이 래퍼들은 거부(rejection)를 `AppError`로 바꿔서, 모든 에러 응답이
//! `{ "detail": ... }` 형태를 갖도록 합니다.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` 대신 쓰는 요청 본문 추출자
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` 대신 쓰는 쿼리 파라미터 추출자
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
