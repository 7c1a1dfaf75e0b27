//! # 카테고리(Category) 모델 정의
//!
//! 카테고리는 지출/수입을 분류하는 라벨입니다. 이름은 전체에서 유일하며,
//! UI 표시용 색상(`#RRGGBB`)을 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::validators::{
    validate_hex_color, validate_length, validate_optional_hex_color, validate_optional_length,
    ValidationError,
};

pub const CATEGORY_NAME_MIN: usize = 2;
pub const CATEGORY_NAME_MAX: usize = 50;
pub const DEFAULT_CATEGORY_COLOR: &str = "#000000";

/// 카테고리 엔티티: `categories` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    /// 카테고리 이름 (2~50자, 유일)
    pub name: String,
    /// 색상 코드 (예: "#FF5733")
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 카테고리 생성 요청. `color`가 없으면 `#000000`을 사용합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// 카테고리 수정 요청. 보낸 필드만 변경됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Validate for CreateCategoryRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        validate_length(&self.name, CATEGORY_NAME_MIN, CATEGORY_NAME_MAX)
            .map_err(|e| e.in_field("name"))?;
        validate_hex_color(&self.color).map_err(|e| e.in_field("color"))?;
        Ok(self)
    }
}

impl Validate for UpdateCategoryRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        validate_optional_length(self.name.as_deref(), CATEGORY_NAME_MIN, CATEGORY_NAME_MAX)
            .map_err(|e| e.in_field("name"))?;
        validate_optional_hex_color(self.color.as_deref()).map_err(|e| e.in_field("color"))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_defaults_to_black() {
        let req: CreateCategoryRequest = serde_json::from_value(json!({ "name": "Еда" })).unwrap();
        let req = req.validate().unwrap();
        assert_eq!(req.color, "#000000");
    }

    #[test]
    fn invalid_color_is_rejected() {
        let req = CreateCategoryRequest {
            name: "Транспорт".to_string(),
            color: "FF5733".to_string(),
        };
        assert_eq!(req.validate().unwrap_err().field, Some("color"));
    }

    #[test]
    fn name_length_counts_characters() {
        let ok = CreateCategoryRequest {
            name: "Ед".to_string(),
            color: default_color(),
        };
        assert!(ok.validate().is_ok());

        let short = CreateCategoryRequest {
            name: "Е".to_string(),
            color: default_color(),
        };
        assert_eq!(short.validate().unwrap_err().field, Some("name"));
    }

    #[test]
    fn update_checks_only_present_fields() {
        assert!(UpdateCategoryRequest::default().validate().is_ok());

        let bad = UpdateCategoryRequest {
            name: None,
            color: Some("#12345".to_string()),
        };
        assert!(bad.validate().is_err());
    }
}
