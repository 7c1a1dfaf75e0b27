//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `note`: 메모(Note) 엔티티와 생성/수정 요청
//! - `category`: 카테고리(Category) 엔티티와 생성/수정 요청
//! - `user`: 사용자(User) 엔티티와 생성/수정 요청
//! - `pagination`: 목록 조회용 `skip`/`limit` 쿼리 파라미터
//!
//! 모든 엔티티는 공통으로 `id`(UUID 문자열), `created_at`, `updated_at`을 가집니다.
//! 요청 구조체는 `Validate`를 구현하여, 저장소에 닿기 전에 필드 제약을 검사합니다.

pub mod category;
pub mod note;
pub mod pagination;
pub mod user;

pub use category::*;
pub use note::*;
pub use pagination::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

use crate::validators::ValidationError;

/// 요청 본문 검증 트레이트
///
/// 검증에 성공하면 (정규화된) 요청을 그대로 돌려줍니다.
/// 예: 이메일은 도메인이 소문자로 바뀐 값으로 교체됩니다.
pub trait Validate: Sized {
    fn validate(self) -> Result<Self, ValidationError>;
}

/// `Option<Option<T>>` 필드용 역직렬화 함수
///
/// `#[serde(default)]`와 함께 쓰면 세 가지 상태를 구분할 수 있습니다:
/// - 필드 누락 → `None` (변경 안 함)
/// - `null` → `Some(None)` (값 지우기)
/// - 값 → `Some(Some(v))`
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
