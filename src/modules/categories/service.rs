use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use coursehub_core::query::Direction;
use coursehub_core::{AppError, QuerySpec};
use coursehub_db::fetch_page;
use coursehub_models::{
    Category, CategoryFilterParams, CreateCategoryDto, PaginatedCategoriesResponse,
    UpdateCategoryDto,
};

const CATEGORY_COLUMNS: &str = "id, name, rank, created_at, updated_at";

/// Rank given to a category created without one.
pub const DEFAULT_RANK: i32 = 1;

pub struct CategoryService;

impl CategoryService {
    /// Every category, `rank` ascending then `id` ascending.
    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories ORDER BY rank ASC, id ASC",
            CATEGORY_COLUMNS
        ))
        .fetch_all(db)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(db))]
    pub async fn get_categories(
        db: &PgPool,
        filters: CategoryFilterParams,
    ) -> Result<PaginatedCategoriesResponse, AppError> {
        let spec = QuerySpec::builder(&filters.pagination)
            .contains("name", filters.name.as_deref())
            .order_by("rank", Direction::Asc)
            .order_by("id", Direction::Asc)
            .build();

        let (categories, total) =
            fetch_page::<Category>(db, CATEGORY_COLUMNS, "categories", &spec).await?;

        Ok(PaginatedCategoriesResponse {
            categories,
            pagination: spec.meta(total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_category(db: &PgPool, id: i64) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))
    }

    #[instrument(skip(db))]
    pub async fn create_category(
        db: &PgPool,
        dto: CreateCategoryDto,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name, rank) VALUES ($1, $2) RETURNING {}",
            CATEGORY_COLUMNS
        ))
        .bind(dto.name)
        .bind(dto.rank.unwrap_or(DEFAULT_RANK))
        .fetch_one(db)
        .await?;

        Ok(category)
    }

    #[instrument(skip(db))]
    pub async fn update_category(
        db: &PgPool,
        id: i64,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                rank = COALESCE($3, rank),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.rank)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))
    }

    /// Refuses while any course still belongs to the category.
    ///
    /// The category row stays locked from the check to the delete, so a
    /// course inserted concurrently waits and then fails its foreign key.
    #[instrument(skip(db))]
    pub async fn delete_category(db: &PgPool, id: i64) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))?;

        let courses: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE category_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if courses > 0 {
            return Err(AppError::bad_request(anyhow!(
                "Category still has courses and cannot be deleted"
            )));
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
