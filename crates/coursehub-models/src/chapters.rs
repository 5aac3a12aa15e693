use chrono::{DateTime, Utc};
use coursehub_core::serde::deserialize_optional_i64;
use coursehub_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::courses::Course;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub video: Option<String>,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapterDto {
    pub course_id: i64,
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    pub content: Option<String>,
    #[validate(length(max = 255, message = "video is too long"))]
    pub video: Option<String>,
    #[validate(range(min = 1, message = "rank must be a positive integer"))]
    pub rank: Option<i32>,
}

/// Moving a chapter to another course is not supported.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateChapterDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(length(max = 255, message = "video is too long"))]
    pub video: Option<String>,
    #[validate(range(min = 1, message = "rank must be a positive integer"))]
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChapterFilterParams {
    /// Course whose chapters are listed (required)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    /// Substring of the chapter title
    pub title: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChapterResponse {
    pub chapter: Chapter,
}

/// A chapter with its course and every chapter of that course.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChapterDetailResponse {
    pub chapter: Chapter,
    pub course: Course,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedChaptersResponse {
    pub chapters: Vec<Chapter>,
    pub pagination: PaginationMeta,
}
