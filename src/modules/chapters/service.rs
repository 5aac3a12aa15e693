use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, instrument};

use coursehub_core::query::Direction;
use coursehub_core::{AppError, QuerySpec};
use coursehub_db::fetch_page;
use coursehub_models::{
    Chapter, ChapterDetailResponse, ChapterFilterParams, CreateChapterDto,
    PaginatedChaptersResponse, UpdateChapterDto,
};

use crate::modules::courses::service::CourseService;

const CHAPTER_COLUMNS: &str = "id, course_id, title, content, video, rank, created_at, updated_at";

const DEFAULT_RANK: i32 = 1;

pub struct ChapterService;

impl ChapterService {
    /// Chapters of a course in reading order.
    #[instrument(skip(db))]
    pub async fn get_for_course(db: &PgPool, course_id: i64) -> Result<Vec<Chapter>, AppError> {
        let chapters = sqlx::query_as::<_, Chapter>(&format!(
            "SELECT {} FROM chapters WHERE course_id = $1 ORDER BY rank ASC, id ASC",
            CHAPTER_COLUMNS
        ))
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(chapters)
    }

    #[instrument(skip(db))]
    pub async fn get_chapter(db: &PgPool, id: i64) -> Result<Chapter, AppError> {
        sqlx::query_as::<_, Chapter>(&format!(
            "SELECT {} FROM chapters WHERE id = $1",
            CHAPTER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Chapter not found")))
    }

    /// A chapter together with its course and all of that course's
    /// chapters.
    #[instrument(skip(db))]
    pub async fn get_chapter_detail(
        db: &PgPool,
        id: i64,
    ) -> Result<ChapterDetailResponse, AppError> {
        let chapter = Self::get_chapter(db, id).await?;
        let course = CourseService::get_course(db, chapter.course_id).await?;
        let chapters = Self::get_for_course(db, course.id).await?;

        Ok(ChapterDetailResponse {
            chapter,
            course,
            chapters,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_chapters(
        db: &PgPool,
        filters: ChapterFilterParams,
    ) -> Result<PaginatedChaptersResponse, AppError> {
        let course_id = filters
            .course_id
            .ok_or_else(|| AppError::bad_request(anyhow!("courseId is required")))?;

        let spec = QuerySpec::builder(&filters.pagination)
            .eq("course_id", Some(course_id))
            .contains("title", filters.title.as_deref())
            .order_by("rank", Direction::Asc)
            .order_by("id", Direction::Asc)
            .build();

        let (chapters, total) =
            fetch_page::<Chapter>(db, CHAPTER_COLUMNS, "chapters", &spec).await?;

        Ok(PaginatedChaptersResponse {
            chapters,
            pagination: spec.meta(total),
        })
    }

    /// Inserts the chapter and bumps the course's `chapters_count` in one
    /// transaction.
    #[instrument(skip(db))]
    pub async fn create_chapter(db: &PgPool, dto: CreateChapterDto) -> Result<Chapter, AppError> {
        let mut tx = db.begin().await?;

        sqlx::query_scalar::<_, i64>("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
            .bind(dto.course_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))?;

        let chapter = sqlx::query_as::<_, Chapter>(&format!(
            "INSERT INTO chapters (course_id, title, content, video, rank)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            CHAPTER_COLUMNS
        ))
        .bind(dto.course_id)
        .bind(dto.title)
        .bind(dto.content)
        .bind(dto.video)
        .bind(dto.rank.unwrap_or(DEFAULT_RANK))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE courses SET chapters_count = chapters_count + 1 WHERE id = $1")
            .bind(chapter.course_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(chapter_id = chapter.id, course_id = chapter.course_id, "Chapter created");

        Ok(chapter)
    }

    #[instrument(skip(db))]
    pub async fn update_chapter(
        db: &PgPool,
        id: i64,
        dto: UpdateChapterDto,
    ) -> Result<Chapter, AppError> {
        sqlx::query_as::<_, Chapter>(&format!(
            "UPDATE chapters SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                video = COALESCE($4, video),
                rank = COALESCE($5, rank),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            CHAPTER_COLUMNS
        ))
        .bind(id)
        .bind(dto.title)
        .bind(dto.content)
        .bind(dto.video)
        .bind(dto.rank)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Chapter not found")))
    }

    /// Deletes the chapter and decrements the course's `chapters_count` in
    /// one transaction.
    #[instrument(skip(db))]
    pub async fn delete_chapter(db: &PgPool, id: i64) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        let course_id: i64 =
            sqlx::query_scalar("DELETE FROM chapters WHERE id = $1 RETURNING course_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow!("Chapter not found")))?;

        sqlx::query(
            "UPDATE courses SET chapters_count = GREATEST(chapters_count - 1, 0) WHERE id = $1",
        )
        .bind(course_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::{ErrorKind, PaginationParams};

    use crate::modules::courses::service::tests::{seed_author, seed_category, seed_course};

    fn chapter_dto(course_id: i64, title: &str, rank: Option<i32>) -> CreateChapterDto {
        CreateChapterDto {
            course_id,
            title: title.to_string(),
            content: None,
            video: None,
            rank,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_chapters_count_follows_create_and_delete(pool: PgPool) {
        let author = seed_author(&pool).await;
        let category = seed_category(&pool, "Backend").await;
        let course = seed_course(&pool, &author, &category, "Rust", false).await;

        let first = ChapterService::create_chapter(&pool, chapter_dto(course.id, "One", None))
            .await
            .unwrap();
        ChapterService::create_chapter(&pool, chapter_dto(course.id, "Two", None))
            .await
            .unwrap();
        let course_after = CourseService::get_course(&pool, course.id).await.unwrap();
        assert_eq!(course_after.chapters_count, 2);

        ChapterService::delete_chapter(&pool, first.id).await.unwrap();
        let course_after = CourseService::get_course(&pool, course.id).await.unwrap();
        assert_eq!(course_after.chapters_count, 1);

        let err = ChapterService::delete_chapter(&pool, first.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_for_missing_course(pool: PgPool) {
        let err = ChapterService::create_chapter(&pool, chapter_dto(404, "Orphan", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_requires_course_and_orders_by_rank(pool: PgPool) {
        let err = ChapterService::get_chapters(
            &pool,
            ChapterFilterParams {
                course_id: None,
                title: None,
                pagination: PaginationParams::default(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);

        let author = seed_author(&pool).await;
        let category = seed_category(&pool, "Backend").await;
        let course = seed_course(&pool, &author, &category, "Rust", false).await;
        ChapterService::create_chapter(&pool, chapter_dto(course.id, "Late", Some(3)))
            .await
            .unwrap();
        ChapterService::create_chapter(&pool, chapter_dto(course.id, "Early", Some(1)))
            .await
            .unwrap();

        let page = ChapterService::get_chapters(
            &pool,
            ChapterFilterParams {
                course_id: Some(course.id),
                title: None,
                pagination: PaginationParams::default(),
            },
        )
        .await
        .unwrap();

        let titles: Vec<&str> = page.chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Late"]);

        let detail = ChapterService::get_chapter_detail(&pool, page.chapters[1].id)
            .await
            .unwrap();
        assert_eq!(detail.course.id, course.id);
        assert_eq!(detail.chapters.len(), 2);
    }
}
