//! Course queries shared by the public listing, search, likes and the admin
//! surface.
//!
//! List endpoints return [`CourseWithAuthor`] rows built from
//! [`COURSE_LIST_SELECT`] over a join that starts at `courses`. Callers that
//! start elsewhere (the liked-courses list) join `courses` in themselves and
//! reuse the projection.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use coursehub_core::query::Direction;
use coursehub_core::{AppError, PaginationParams, QuerySpec};
use coursehub_db::fetch_page;
use coursehub_models::{
    AdminCourseFilterParams, Author, Course, CourseDetailResponse, CourseWithAuthor,
    CreateCourseDto, PaginatedCoursesResponse, UpdateCourseDto,
};

use crate::modules::categories::service::CategoryService;
use crate::modules::chapters::service::ChapterService;

pub const COURSE_COLUMNS: &str = "id, category_id, user_id, name, image, recommended, \
     introductory, content, likes_count, chapters_count, created_at, updated_at";

pub const COURSE_LIST_SELECT: &str = "courses.id, courses.category_id, courses.user_id, \
     courses.name, courses.image, courses.recommended, courses.introductory, courses.content, \
     courses.likes_count, courses.chapters_count, courses.created_at, courses.updated_at, \
     categories.name AS category_name, users.nickname AS author_nickname";

/// Joins needed by [`COURSE_LIST_SELECT`], without the leading table.
pub const COURSE_LIST_JOINS: &str = "JOIN categories ON categories.id = courses.category_id \
     JOIN users ON users.id = courses.user_id";

pub struct CourseService;

impl CourseService {
    /// Runs a list query over `courses` and its joins.
    pub async fn list(db: &PgPool, spec: &QuerySpec) -> Result<PaginatedCoursesResponse, AppError> {
        let from = format!("courses {}", COURSE_LIST_JOINS);
        let (courses, total) =
            fetch_page::<CourseWithAuthor>(db, COURSE_LIST_SELECT, &from, spec).await?;

        Ok(PaginatedCoursesResponse {
            courses,
            pagination: spec.meta(total),
        })
    }

    /// Public listing of one category, newest first.
    #[instrument(skip(db))]
    pub async fn get_by_category(
        db: &PgPool,
        category_id: Option<i64>,
        pagination: &PaginationParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let category_id =
            category_id.ok_or_else(|| AppError::bad_request(anyhow!("categoryId is required")))?;

        let spec = QuerySpec::builder(pagination)
            .eq("courses.category_id", Some(category_id))
            .order_by("courses.id", Direction::Desc)
            .build();

        Self::list(db, &spec).await
    }

    /// Substring search on the course name. Without a name every course
    /// matches.
    #[instrument(skip(db))]
    pub async fn search(
        db: &PgPool,
        name: Option<&str>,
        pagination: &PaginationParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let spec = QuerySpec::builder(pagination)
            .contains("courses.name", name)
            .order_by("courses.id", Direction::Desc)
            .build();

        Self::list(db, &spec).await
    }

    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        filters: AdminCourseFilterParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let spec = QuerySpec::builder(&filters.pagination)
            .eq("courses.category_id", filters.category_id)
            .eq("courses.user_id", filters.user_id)
            .contains("courses.name", filters.name.as_deref())
            .eq("courses.recommended", filters.recommended)
            .eq("courses.introductory", filters.introductory)
            .order_by("courses.id", Direction::Desc)
            .build();

        Self::list(db, &spec).await
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: i64) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {} FROM courses WHERE id = $1",
            COURSE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))
    }

    /// A course with its category, author and chapters in reading order.
    #[instrument(skip(db))]
    pub async fn get_course_detail(db: &PgPool, id: i64) -> Result<CourseDetailResponse, AppError> {
        let course = Self::get_course(db, id).await?;
        let category = CategoryService::get_category(db, course.category_id).await?;

        let author = sqlx::query_as::<_, Author>(
            "SELECT id, username, nickname, avatar FROM users WHERE id = $1",
        )
        .bind(course.user_id)
        .fetch_one(db)
        .await?;

        let chapters = ChapterService::get_for_course(db, course.id).await?;

        Ok(CourseDetailResponse {
            course,
            category,
            author,
            chapters,
        })
    }

    /// Up to `limit` courses matching `condition`, highest `order` first.
    async fn feed(
        db: &PgPool,
        condition: &str,
        order: &str,
        limit: i64,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {} FROM courses WHERE {} ORDER BY {} DESC, id DESC LIMIT $1",
            COURSE_COLUMNS, condition, order
        ))
        .bind(limit)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    pub async fn recommended(db: &PgPool, limit: i64) -> Result<Vec<Course>, AppError> {
        Self::feed(db, "recommended = TRUE", "id", limit).await
    }

    pub async fn most_liked(db: &PgPool, limit: i64) -> Result<Vec<Course>, AppError> {
        Self::feed(db, "TRUE", "likes_count", limit).await
    }

    pub async fn introductory(db: &PgPool, limit: i64) -> Result<Vec<Course>, AppError> {
        Self::feed(db, "introductory = TRUE", "id", limit).await
    }

    /// Creates a course authored by `user_id`.
    #[instrument(skip(db))]
    pub async fn create_course(
        db: &PgPool,
        user_id: i64,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (category_id, user_id, name, image, recommended, introductory, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            COURSE_COLUMNS
        ))
        .bind(dto.category_id)
        .bind(user_id)
        .bind(dto.name)
        .bind(dto.image)
        .bind(dto.recommended.unwrap_or(false))
        .bind(dto.introductory.unwrap_or(false))
        .bind(dto.content)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn update_course(
        db: &PgPool,
        id: i64,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses SET
                category_id = COALESCE($2, category_id),
                name = COALESCE($3, name),
                image = COALESCE($4, image),
                recommended = COALESCE($5, recommended),
                introductory = COALESCE($6, introductory),
                content = COALESCE($7, content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            COURSE_COLUMNS
        ))
        .bind(id)
        .bind(dto.category_id)
        .bind(dto.name)
        .bind(dto.image)
        .bind(dto.recommended)
        .bind(dto.introductory)
        .bind(dto.content)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))
    }

    /// Refuses while the course still has chapters. Likes go with it.
    ///
    /// Holds the course row lock that `create_chapter` also takes, so the
    /// chapter check cannot go stale before the delete.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: i64) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        sqlx::query_scalar::<_, i64>("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))?;

        let chapters: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapters WHERE course_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if chapters > 0 {
            return Err(AppError::bad_request(anyhow!(
                "Course still has chapters and cannot be deleted"
            )));
        }

        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
