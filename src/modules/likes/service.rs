//! Likes toggle and the caller's liked courses.
//!
//! `courses.likes_count` always equals the number of `likes` rows for the
//! course. The toggle holds the course row lock while it flips the like and
//! adjusts the counter, so concurrent toggles on one course serialize.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, instrument};

use coursehub_core::query::Direction;
use coursehub_core::{AppError, PaginationParams, QuerySpec};
use coursehub_db::fetch_page;
use coursehub_models::{CourseWithAuthor, LikeToggleResponse, PaginatedCoursesResponse};
use coursehub_observability::track_course_liked;

use crate::modules::courses::service::{COURSE_LIST_JOINS, COURSE_LIST_SELECT};

pub struct LikeService;

impl LikeService {
    /// Likes the course if the user has not, unlikes it otherwise.
    #[instrument(skip(db))]
    pub async fn toggle_like(
        db: &PgPool,
        user_id: i64,
        course_id: i64,
    ) -> Result<LikeToggleResponse, AppError> {
        let mut tx = db.begin().await?;

        sqlx::query_scalar::<_, i32>("SELECT likes_count FROM courses WHERE id = $1 FOR UPDATE")
            .bind(course_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))?;

        let removed = sqlx::query("DELETE FROM likes WHERE course_id = $1 AND user_id = $2")
            .bind(course_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = removed == 0;
        if liked {
            sqlx::query("INSERT INTO likes (course_id, user_id) VALUES ($1, $2)")
                .bind(course_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let delta: i32 = if liked { 1 } else { -1 };
        let likes_count: i32 = sqlx::query_scalar(
            "UPDATE courses SET likes_count = likes_count + $2 WHERE id = $1 RETURNING likes_count",
        )
        .bind(course_id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        track_course_liked(liked);
        debug!(liked, likes_count, "Like toggled");

        Ok(LikeToggleResponse { liked, likes_count })
    }

    /// Courses the user likes, most recently liked first.
    #[instrument(skip(db))]
    pub async fn get_liked_courses(
        db: &PgPool,
        user_id: i64,
        pagination: &PaginationParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let spec = QuerySpec::builder(pagination)
            .eq("likes.user_id", Some(user_id))
            .order_by("likes.id", Direction::Desc)
            .build();

        let from = format!(
            "likes JOIN courses ON courses.id = likes.course_id {}",
            COURSE_LIST_JOINS
        );
        let (courses, total) =
            fetch_page::<CourseWithAuthor>(db, COURSE_LIST_SELECT, &from, &spec).await?;

        Ok(PaginatedCoursesResponse {
            courses,
            pagination: spec.meta(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::ErrorKind;

    use crate::modules::courses::service::CourseService;
    use crate::modules::courses::service::tests::{seed_author, seed_category, seed_course};

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_toggle_twice_restores_count(pool: PgPool) {
        let author = seed_author(&pool).await;
        let category = seed_category(&pool, "Backend").await;
        let course = seed_course(&pool, &author, &category, "Rust", false).await;

        let first = LikeService::toggle_like(&pool, author.id, course.id)
            .await
            .unwrap();
        assert_eq!(
            first,
            LikeToggleResponse {
                liked: true,
                likes_count: 1
            }
        );

        let liked = LikeService::get_liked_courses(&pool, author.id, &PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(liked.pagination.total, 1);
        assert_eq!(liked.courses[0].course.id, course.id);

        let second = LikeService::toggle_like(&pool, author.id, course.id)
            .await
            .unwrap();
        assert_eq!(
            second,
            LikeToggleResponse {
                liked: false,
                likes_count: 0
            }
        );

        let course = CourseService::get_course(&pool, course.id).await.unwrap();
        assert_eq!(course.likes_count, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_concurrent_toggles_keep_count_consistent(pool: PgPool) {
        let author = seed_author(&pool).await;
        let category = seed_category(&pool, "Backend").await;
        let course = seed_course(&pool, &author, &category, "Rust", false).await;

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = pool.clone();
                let (user_id, course_id) = (author.id, course.id);
                tokio::spawn(async move { LikeService::toggle_like(&pool, user_id, course_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE course_id = $1")
            .bind(course.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        let course = CourseService::get_course(&pool, course.id).await.unwrap();
        assert_eq!(stored, 0);
        assert_eq!(i64::from(course.likes_count), stored);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_toggle_missing_course(pool: PgPool) {
        let author = seed_author(&pool).await;

        let err = LikeService::toggle_like(&pool, author.id, 12345)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
