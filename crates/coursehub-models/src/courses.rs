//! Course models.
//!
//! `likes_count` and `chapters_count` are denormalized counters owned by the
//! like toggle and the chapter service. No DTO exposes them for writing.

use chrono::{DateTime, Utc};
use coursehub_core::serde::{deserialize_optional_bool, deserialize_optional_i64};
use coursehub_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::categories::Category;
use crate::chapters::Chapter;
use crate::users::Author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub category_id: i64,
    /// Author
    pub user_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub recommended: bool,
    pub introductory: bool,
    pub content: Option<String>,
    pub likes_count: i32,
    pub chapters_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List row: a course plus the names needed to render it without further
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithAuthor {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub course: Course,
    pub category_name: String,
    pub author_nickname: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub category_id: i64,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "image is too long"))]
    pub image: Option<String>,
    pub recommended: Option<bool>,
    pub introductory: Option<bool>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "image is too long"))]
    pub image: Option<String>,
    pub recommended: Option<bool>,
    pub introductory: Option<bool>,
    pub content: Option<String>,
}

/// Public listing of one category's courses.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CoursesByCategoryParams {
    /// Category to list (required)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub category_id: Option<i64>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring of the course name
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Admin course list filters. Supplied filters combine with AND.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminCourseFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub category_id: Option<i64>,
    /// Author id
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub user_id: Option<i64>,
    /// Substring of the course name
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub recommended: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub introductory: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course: Course,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub course: Course,
    pub category: Category,
    pub author: Author,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseWithAuthor>,
    pub pagination: PaginationMeta,
}

/// Homepage feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub recommended_courses: Vec<Course>,
    pub likes_courses: Vec<Course>,
    pub introductory_courses: Vec<Course>,
}
