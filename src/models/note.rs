//! # 메모(Note) 모델 정의
//!
//! - `Note`: `notes` 테이블 한 행(row)에 대응 (응답용)
//! - `CreateNoteRequest`: `POST /api/v1/notes` 요청 본문
//! - `UpdateNoteRequest`: `PUT|PATCH /api/v1/notes/{id}` 요청 본문

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_some, Validate};
use crate::validators::{validate_length, validate_optional_length, ValidationError};

pub const NOTE_TITLE_MAX: usize = 100;
pub const NOTE_CONTENT_MAX: usize = 1000;

/// 메모 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    /// 메모 고유 식별자 (UUIDv7 문자열, 36자)
    pub id: String,
    /// 제목 (1~100자)
    pub title: String,
    /// 본문 (최대 1000자), 없을 수도 있음
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// 메모 수정 요청
///
/// `content`는 `Option<Option<String>>`입니다:
/// 필드 누락 = 변경 안 함, `null` = 본문 지우기, 문자열 = 덮어쓰기.
/// `title`은 NULL이 될 수 없으므로 `null`도 "변경 안 함"으로 취급합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub content: Option<Option<String>>,
}

impl Validate for CreateNoteRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        validate_length(&self.title, 1, NOTE_TITLE_MAX).map_err(|e| e.in_field("title"))?;
        validate_optional_length(self.content.as_deref(), 0, NOTE_CONTENT_MAX)
            .map_err(|e| e.in_field("content"))?;
        Ok(self)
    }
}

impl Validate for UpdateNoteRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        validate_optional_length(self.title.as_deref(), 1, NOTE_TITLE_MAX)
            .map_err(|e| e.in_field("title"))?;
        // Some(None)(지우기)는 항상 유효
        validate_optional_length(self.content.clone().flatten().as_deref(), 0, NOTE_CONTENT_MAX)
            .map_err(|e| e.in_field("content"))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_title_is_rejected() {
        let req: CreateNoteRequest =
            serde_json::from_value(json!({ "title": "", "content": "x" })).unwrap();
        assert_eq!(req.validate().unwrap_err().field, Some("title"));
    }

    #[test]
    fn content_is_optional_and_bounded() {
        let req: CreateNoteRequest = serde_json::from_value(json!({ "title": "t" })).unwrap();
        assert_eq!(req.validate().unwrap().content, None);

        let long = "a".repeat(NOTE_CONTENT_MAX + 1);
        let req: CreateNoteRequest =
            serde_json::from_value(json!({ "title": "t", "content": long })).unwrap();
        assert_eq!(req.validate().unwrap_err().field, Some("content"));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let absent: UpdateNoteRequest = serde_json::from_value(json!({ "title": "x" })).unwrap();
        assert_eq!(absent.content, None);

        let cleared: UpdateNoteRequest =
            serde_json::from_value(json!({ "content": null })).unwrap();
        assert_eq!(cleared.content, Some(None));

        let set: UpdateNoteRequest =
            serde_json::from_value(json!({ "content": "new" })).unwrap();
        assert_eq!(set.content, Some(Some("new".to_string())));
    }

    #[test]
    fn null_title_means_unchanged() {
        let req: UpdateNoteRequest = serde_json::from_value(json!({ "title": null })).unwrap();
        assert_eq!(req.title, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_title_length_is_checked() {
        let req = UpdateNoteRequest {
            title: Some(String::new()),
            content: None,
        };
        assert!(req.validate().is_err());
    }
}
