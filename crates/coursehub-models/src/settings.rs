use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Id of the single settings row.
pub const SETTINGS_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Setting {
    pub id: i64,
    /// Site name
    pub name: String,
    /// ICP filing number shown in the footer
    pub icp: Option<String>,
    pub copyright: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "icp is too long"))]
    pub icp: Option<String>,
    #[validate(length(min = 1, max = 255, message = "copyright must be between 1 and 255 characters"))]
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettingResponse {
    pub setting: Setting,
}
