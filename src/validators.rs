//! # 필드 검증(Validation) 모듈
//!
//! 요청 본문의 개별 필드를 검사하는 순수 함수 모음입니다.
//! 모든 함수는 부작용이 없으며, 성공 시 (필요하면 정규화된) 값을,
//! 실패 시 사람이 읽을 수 있는 사유를 담은 `ValidationError`를 반환합니다.
//!
//! - `validate_hex_color`: `#RRGGBB` 형식의 HEX 색상
//! - `validate_email`: 이메일 문법 검사 (전달 가능 여부는 확인하지 않음)
//! - `validate_password`: 최소 길이 + 숫자 + 문자 포함
//! - `validate_phone`: 러시아/북미 전화번호를 `+7…`/`+1…` 형태로 정규화
//! - `validate_range`, `validate_length`: 경계값을 포함하는 범위 검사
//!
//! `validate_optional_*` 함수들은 `None`이면 바로 성공합니다 (부분 업데이트용).

use std::fmt::Display;
use std::sync::LazyLock;

use email_address::{EmailAddress, Options};
use regex::Regex;
use thiserror::Error;

/// `#` 뒤에 16진수 6자리. 대소문자 구분 없음.
pub const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

/// 비밀번호 최소 길이 기본값
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

/// 필드 검증 실패
///
/// `field`는 어떤 필드에서 실패했는지 알 수 있을 때만 채워집니다.
/// Display 결과: `"title: must be at most 100 characters long"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", field_prefix(.field), .message)]
pub struct ValidationError {
    pub field: Option<&'static str>,
    pub message: String,
}

fn field_prefix(field: &Option<&'static str>) -> String {
    match field {
        Some(name) => format!("{name}: "),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// 에러에 필드 이름을 붙입니다.
    pub fn in_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }
}

// ============ 색상 ============

/// HEX 색상 검증. 정규화하지 않으므로 대소문자가 그대로 유지됩니다.
///
/// - 유효: `#FF5733`, `#000000`, `#123abc`
/// - 무효: `FF5733` (# 없음), `#FF5` (길이 부족), `#GGGGGG` (16진수 아님)
pub fn validate_hex_color(color: &str) -> Result<&str, ValidationError> {
    if !HEX_COLOR_RE.is_match(color) {
        return Err(ValidationError::new(
            "color must be a HEX color in #RRGGBB format",
        ));
    }
    Ok(color)
}

pub fn validate_optional_hex_color(color: Option<&str>) -> Result<Option<&str>, ValidationError> {
    color.map(validate_hex_color).transpose()
}

// ============ 이메일 ============

/// 이메일 문법 검증
///
/// 로컬 파트, `@` 위치, 도메인(최상위 도메인 포함)을 검사합니다.
/// 성공 시 도메인을 소문자로 바꾼 정규화된 주소를 반환합니다.
///
/// - 유효: `user@example.com`, `first.last@domain.co.uk`
/// - 무효: `user@.com`, `@example.com`, `user@domain`
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let parsed = EmailAddress::parse_with_options(email, Options::default().with_required_tld())
        .map_err(|e| ValidationError::new(format!("invalid email address: {e}")))?;

    // "Name <user@example.com>" 같은 표시 이름(display text)은 허용하지 않습니다.
    let bare = format!("{}@{}", parsed.local_part(), parsed.domain());
    if bare != email {
        return Err(ValidationError::new(
            "invalid email address: display names are not allowed",
        ));
    }

    Ok(format!(
        "{}@{}",
        parsed.local_part(),
        parsed.domain().to_lowercase()
    ))
}

pub fn validate_optional_email(email: Option<&str>) -> Result<Option<String>, ValidationError> {
    email.map(validate_email).transpose()
}

// ============ 비밀번호 ============

/// 비밀번호 검증: `min_length`자 이상, 숫자(0-9) 1개 이상, 문자 1개 이상.
/// `½`, `Ⅻ` 같은 숫자 모양 문자는 숫자로 치지 않습니다.
/// 조건은 이 순서대로 검사되며 처음 실패한 조건의 메시지를 반환합니다.
pub fn validate_password(password: &str, min_length: usize) -> Result<&str, ValidationError> {
    if password.chars().count() < min_length {
        return Err(ValidationError::new(format!(
            "password must be at least {min_length} characters long"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "password must contain at least one digit",
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::new(
            "password must contain at least one letter",
        ));
    }
    Ok(password)
}

// ============ 전화번호 ============

/// 전화번호 검증 및 정규화
///
/// 숫자가 아닌 문자를 모두 제거한 뒤:
/// - 7 또는 8로 시작하는 11자리 → `+7` + 뒤 10자리
/// - 7 또는 8로 시작하는 10자리 → `+7` + 10자리 전체
/// - 1로 시작하는 11자리 (미국/캐나다) → `+1…`
///
/// 예: `+7 (900) 123-45-67` → `+79001234567`, `+1-800-123-4567` → `+18001234567`
pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with('7') || digits.starts_with('8') {
        match digits.len() {
            11 => return Ok(format!("+7{}", &digits[1..])),
            10 => return Ok(format!("+7{digits}")),
            _ => {}
        }
    }

    if digits.starts_with('1') && digits.len() == 11 {
        return Ok(format!("+{digits}"));
    }

    Err(ValidationError::new("invalid phone number"))
}

pub fn validate_optional_phone(phone: Option<&str>) -> Result<Option<String>, ValidationError> {
    phone.map(validate_phone).transpose()
}

// ============ 범위 / 길이 ============

/// `min <= value <= max` 인지 검사합니다. 양 끝 포함.
pub fn validate_range<T>(value: T, min: T, max: T) -> Result<T, ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    if !(min <= value && value <= max) {
        return Err(ValidationError::new(format!(
            "value must be between {min} and {max}"
        )));
    }
    Ok(value)
}

/// 문자열 길이가 `[min_len, max_len]` 안에 있는지 검사합니다.
/// 길이는 바이트가 아니라 문자(char) 수로 셉니다. ("Еда"는 3자)
pub fn validate_length(text: &str, min_len: usize, max_len: usize) -> Result<&str, ValidationError> {
    let len = text.chars().count();
    if len < min_len {
        return Err(ValidationError::new(format!(
            "must be at least {min_len} characters long"
        )));
    }
    if len > max_len {
        return Err(ValidationError::new(format!(
            "must be at most {max_len} characters long"
        )));
    }
    Ok(text)
}

pub fn validate_optional_length(
    text: Option<&str>,
    min_len: usize,
    max_len: usize,
) -> Result<Option<&str>, ValidationError> {
    text.map(|t| validate_length(t, min_len, max_len)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_valid_values_unchanged() {
        for color in ["#FF5733", "#000000", "#123ABC", "#abcdef"] {
            assert_eq!(validate_hex_color(color), Ok(color));
        }
    }

    #[test]
    fn hex_color_rejects_malformed_values() {
        for color in ["FF5733", "#12345", "#GGGGGG", "#1234567", "", "#FF 733"] {
            let err = validate_hex_color(color).unwrap_err();
            assert!(err.message.contains("HEX"), "{color}: {err}");
        }
    }

    #[test]
    fn optional_hex_color_skips_none() {
        assert_eq!(validate_optional_hex_color(None), Ok(None));
        assert!(validate_optional_hex_color(Some("red")).is_err());
    }

    #[test]
    fn email_accepts_valid_addresses() {
        assert_eq!(
            validate_email("test@example.com").unwrap(),
            "test@example.com"
        );
        assert_eq!(
            validate_email("first.last@domain.co.uk").unwrap(),
            "first.last@domain.co.uk"
        );
    }

    #[test]
    fn email_lowercases_domain() {
        assert_eq!(
            validate_email("John@Example.COM").unwrap(),
            "John@example.com"
        );
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for email in ["user@.com", "@example.com", "user@domain", "plainaddress"] {
            let err = validate_email(email).unwrap_err();
            assert!(err.message.contains("email"), "{email}: {err}");
        }
    }

    #[test]
    fn password_rules() {
        assert_eq!(
            validate_password("Password123", DEFAULT_PASSWORD_MIN_LENGTH),
            Ok("Password123")
        );
        assert!(validate_password("Short1", DEFAULT_PASSWORD_MIN_LENGTH)
            .unwrap_err()
            .message
            .contains("at least 8"));
        assert!(validate_password("NoDigitsHere", DEFAULT_PASSWORD_MIN_LENGTH)
            .unwrap_err()
            .message
            .contains("digit"));
        assert!(validate_password("12345678", DEFAULT_PASSWORD_MIN_LENGTH)
            .unwrap_err()
            .message
            .contains("letter"));
        for fake_digit in ["abcdefgh½", "abcdefghⅫ", "abcdefgh²"] {
            assert!(validate_password(fake_digit, DEFAULT_PASSWORD_MIN_LENGTH)
                .unwrap_err()
                .message
                .contains("digit"));
        }
    }

    #[test]
    fn password_minimum_is_configurable() {
        assert!(validate_password("abc1", 4).is_ok());
        assert!(validate_password("abc1", 5).is_err());
    }

    #[test]
    fn phone_numbers_are_normalized() {
        let cases = [
            ("+7 (900) 123-45-67", "+79001234567"),
            ("89001234567", "+79001234567"),
            ("8-900-123-45-67", "+79001234567"),
            ("7900123456", "+77900123456"),
            ("+1-800-123-4567", "+18001234567"),
        ];
        for (input, expected) in cases {
            assert_eq!(validate_phone(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn phone_rejects_unknown_formats() {
        for phone in ["12345", "9001234567", "+44 20 7946 0958", ""] {
            assert_eq!(
                validate_phone(phone).unwrap_err().message,
                "invalid phone number"
            );
        }
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(validate_range(1, 1, 10), Ok(1));
        assert_eq!(validate_range(10, 1, 10), Ok(10));
        assert_eq!(validate_range(2.5, 0.0, 5.0), Ok(2.5));
        let err = validate_range(11, 1, 10).unwrap_err();
        assert_eq!(err.message, "value must be between 1 and 10");
        assert!(validate_range(0, 1, 10).is_err());
    }

    #[test]
    fn length_counts_chars_and_names_bound() {
        assert_eq!(validate_length("Еда", 2, 50), Ok("Еда"));
        assert!(validate_length("a", 2, 50)
            .unwrap_err()
            .message
            .contains("at least 2"));
        assert!(validate_length("abcdef", 1, 5)
            .unwrap_err()
            .message
            .contains("at most 5"));
        assert_eq!(validate_optional_length(None, 1, 5), Ok(None));
    }

    #[test]
    fn field_name_is_prefixed_in_display() {
        let err = ValidationError::new("bad").in_field("color");
        assert_eq!(err.to_string(), "color: bad");
        assert_eq!(ValidationError::new("bad").to_string(), "bad");
    }
}
