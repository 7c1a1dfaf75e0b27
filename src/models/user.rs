use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::validators::{validate_email, validate_length, ValidationError};

pub const USER_EMAIL_MAX: usize = 100;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

fn check_email(email: &str) -> Result<String, ValidationError> {
    validate_length(email, 1, USER_EMAIL_MAX).map_err(|e| e.in_field("email"))?;
    validate_email(email).map_err(|e| e.in_field("email"))
}

fn check_username(username: &str) -> Result<(), ValidationError> {
    validate_length(username, USERNAME_MIN, USERNAME_MAX)
        .map(|_| ())
        .map_err(|e| e.in_field("username"))
}

impl Validate for CreateUserRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        let email = check_email(&self.email)?;
        check_username(&self.username)?;
        Ok(Self { email, ..self })
    }
}

impl Validate for UpdateUserRequest {
    fn validate(self) -> Result<Self, ValidationError> {
        let email = self.email.as_deref().map(check_email).transpose()?;
        if let Some(username) = &self.username {
            check_username(username)?;
        }
        Ok(Self { email, ..self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_canonicalizes_email() {
        let req = CreateUserRequest {
            email: "john@Example.com".to_string(),
            username: "john_doe".to_string(),
        };
        assert_eq!(req.validate().unwrap().email, "john@example.com");
    }

    #[test]
    fn create_rejects_bad_email_and_short_username() {
        let bad_email = CreateUserRequest {
            email: "user@domain".to_string(),
            username: "john_doe".to_string(),
        };
        assert_eq!(bad_email.validate().unwrap_err().field, Some("email"));

        let short = CreateUserRequest {
            email: "a@b.io".to_string(),
            username: "jo".to_string(),
        };
        assert_eq!(short.validate().unwrap_err().field, Some("username"));
    }

    #[test]
    fn overlong_email_is_rejected() {
        let req = CreateUserRequest {
            email: format!("{}@example.com", "a".repeat(USER_EMAIL_MAX)),
            username: "john_doe".to_string(),
        };
        assert_eq!(req.validate().unwrap_err().field, Some("email"));
    }

    #[test]
    fn update_validates_present_fields_only() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let req = UpdateUserRequest {
            email: Some("New@Mail.RU".to_string()),
            username: None,
        };
        assert_eq!(req.validate().unwrap().email.as_deref(), Some("New@mail.ru"));
    }
}
