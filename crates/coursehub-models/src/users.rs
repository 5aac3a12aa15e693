//! User domain models and DTOs.
//!
//! The `users` table stores credentials next to the profile. [`User`] never
//! carries the password digest; [`UserCredentials`] is the only row type that
//! does and it is never serialized.

use std::fmt;

use chrono::{DateTime, Utc};
use coursehub_core::serde::deserialize_optional_i16;
use coursehub_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Column list for queries decoding into [`User`].
pub const USER_COLUMNS: &str =
    "id, email, username, nickname, avatar, sex, company, introduce, role, created_at, updated_at";

/// Sex value assigned at sign-up: unspecified.
pub const SEX_UNSPECIFIED: i16 = 2;

/// Trust level of an account, stored as a SMALLINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum UserRole {
    Normal,
    Admin,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }
}

impl From<UserRole> for i16 {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Normal => 0,
            UserRole::Admin => 100,
        }
    }
}

/// A stored role value other than 0 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRole(pub i16);

impl fmt::Display for InvalidRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user role {}", self.0)
    }
}

impl std::error::Error for InvalidRole {}

impl TryFrom<i16> for UserRole {
    type Error = InvalidRole;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Normal),
            100 => Ok(UserRole::Admin),
            other => Err(InvalidRole(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub nickname: String,
    pub avatar: Option<String>,
    /// 0 male, 1 female, 2 unspecified
    pub sex: i16,
    pub company: Option<String>,
    pub introduce: Option<String>,
    /// 0 normal user, 100 administrator
    #[sqlx(try_from = "i16")]
    #[schema(value_type = i16)]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Password digest and role, loaded only to authenticate.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub password: String,
    #[sqlx(try_from = "i16")]
    pub role: UserRole,
}

/// Public subset of a user shown next to the content they authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignUpDto {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 2, max = 45, message = "username must be between 2 and 45 characters"))]
    pub username: String,
    #[validate(length(min = 2, max = 45, message = "nickname must be between 2 and 45 characters"))]
    pub nickname: String,
    #[validate(length(min = 6, max = 45, message = "password must be between 6 and 45 characters"))]
    pub password: String,
}

/// `login` matches either the email or the username.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignInDto {
    #[validate(length(min = 1, message = "login is required"))]
    pub login: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserInfoDto {
    #[validate(length(min = 2, max = 45, message = "nickname must be between 2 and 45 characters"))]
    pub nickname: Option<String>,
    #[validate(range(min = 0, max = 2, message = "sex must be 0, 1 or 2"))]
    pub sex: Option<i16>,
    #[validate(length(max = 255, message = "company is too long"))]
    pub company: Option<String>,
    pub introduce: Option<String>,
    #[validate(length(max = 255, message = "avatar is too long"))]
    pub avatar: Option<String>,
}

/// Changing login data requires the current password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 45, message = "username must be between 2 and 45 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 6, max = 45, message = "password must be between 6 and 45 characters"))]
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    #[validate(length(min = 1, message = "currentPassword is required"))]
    pub current_password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AdminCreateUserDto {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 2, max = 45, message = "username must be between 2 and 45 characters"))]
    pub username: String,
    #[validate(length(min = 2, max = 45, message = "nickname must be between 2 and 45 characters"))]
    pub nickname: String,
    #[validate(length(min = 6, max = 45, message = "password must be between 6 and 45 characters"))]
    pub password: String,
    #[validate(range(min = 0, max = 2, message = "sex must be 0, 1 or 2"))]
    pub sex: Option<i16>,
    /// 0 normal user (default), 100 administrator
    pub role: Option<i16>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub introduce: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AdminUpdateUserDto {
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 45, message = "username must be between 2 and 45 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 2, max = 45, message = "nickname must be between 2 and 45 characters"))]
    pub nickname: Option<String>,
    #[validate(length(min = 6, max = 45, message = "password must be between 6 and 45 characters"))]
    pub password: Option<String>,
    #[validate(range(min = 0, max = 2, message = "sex must be 0, 1 or 2"))]
    pub sex: Option<i16>,
    pub role: Option<i16>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub introduce: Option<String>,
}

/// Query parameters for the admin user list. Filters combine with AND.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterParams {
    /// Substring of the email
    pub email: Option<String>,
    /// Substring of the username
    pub username: Option<String>,
    /// Substring of the nickname
    pub nickname: Option<String>,
    /// Exact role (0 or 100)
    #[serde(default, deserialize_with = "deserialize_optional_i16")]
    pub role: Option<i16>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub users: Vec<User>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversions() {
        assert_eq!(UserRole::try_from(0), Ok(UserRole::Normal));
        assert_eq!(UserRole::try_from(100), Ok(UserRole::Admin));
        assert_eq!(UserRole::try_from(50), Err(InvalidRole(50)));
        assert_eq!(i16::from(UserRole::Admin), 100);
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Normal.is_admin());
    }

    #[test]
    fn test_role_serializes_as_number() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), 100);
        let role: UserRole = serde_json::from_str("0").unwrap();
        assert_eq!(role, UserRole::Normal);
        assert!(serde_json::from_str::<UserRole>("7").is_err());
    }

    #[test]
    fn test_user_json_has_no_password() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
            nickname: "Alice".to_string(),
            avatar: None,
            sex: SEX_UNSPECIFIED,
            company: None,
            introduce: None,
            role: UserRole::Normal,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["role"], 0);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_sign_up_validation() {
        let dto = SignUpDto {
            email: "not-an-email".to_string(),
            username: "a".to_string(),
            nickname: "Alice".to_string(),
            password: "abc".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("nickname"));
    }

    #[test]
    fn test_update_info_skips_absent_fields() {
        let dto: UpdateUserInfoDto = serde_json::from_str(r#"{"sex": 1}"#).unwrap();
        assert!(dto.validate().is_ok());

        let dto: UpdateUserInfoDto = serde_json::from_str(r#"{"sex": 3}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
