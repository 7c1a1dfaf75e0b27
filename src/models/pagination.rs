use serde::Deserialize;

use crate::validators::{validate_range, ValidationError};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

/// `?skip=0&limit=100` 쿼리 파라미터
///
/// 범위를 벗어난 값은 저장소에 닿기 전에 422로 거부됩니다.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl super::Validate for Pagination {
    fn validate(self) -> Result<Self, ValidationError> {
        validate_range(self.skip, 0, i64::MAX).map_err(|e| e.in_field("skip"))?;
        validate_range(self.limit, 1, MAX_LIMIT).map_err(|e| e.in_field("limit"))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Validate;

    #[test]
    fn defaults_are_valid() {
        let page = Pagination::default().validate().unwrap();
        assert_eq!((page.skip, page.limit), (0, 100));
    }

    #[test]
    fn limit_bounds_are_enforced() {
        let too_big = Pagination { skip: 0, limit: 1001 };
        assert_eq!(too_big.validate().unwrap_err().field, Some("limit"));

        let zero = Pagination { skip: 0, limit: 0 };
        assert!(zero.validate().is_err());

        let max = Pagination { skip: 0, limit: 1000 };
        assert!(max.validate().is_ok());
    }

    #[test]
    fn negative_skip_is_rejected() {
        let page = Pagination { skip: -1, limit: 10 };
        assert_eq!(page.validate().unwrap_err().field, Some("skip"));
    }
}
