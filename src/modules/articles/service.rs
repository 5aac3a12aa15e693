//! Articles with soft delete.
//!
//! A trashed article has `deleted_at` set. Public reads never see it; the
//! admin list shows either the live set or the trash, never both.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument};

use coursehub_core::{AppError, PaginationParams, QuerySpec};
use coursehub_db::fetch_page;
use coursehub_models::{
    Article, ArticleFilterParams, CreateArticleDto, PaginatedArticlesResponse, UpdateArticleDto,
};

const ARTICLE_COLUMNS: &str = "id, title, content, deleted_at, created_at, updated_at";

pub struct ArticleService;

impl ArticleService {
    async fn list(db: &PgPool, spec: &QuerySpec) -> Result<PaginatedArticlesResponse, AppError> {
        let (articles, total) =
            fetch_page::<Article>(db, ARTICLE_COLUMNS, "articles", spec).await?;

        Ok(PaginatedArticlesResponse {
            articles,
            pagination: spec.meta(total),
        })
    }

    /// Live articles only.
    #[instrument(skip(db))]
    pub async fn get_public_articles(
        db: &PgPool,
        title: Option<&str>,
        pagination: &PaginationParams,
    ) -> Result<PaginatedArticlesResponse, AppError> {
        let spec = QuerySpec::builder(pagination)
            .contains("title", title)
            .is_null("deleted_at")
            .build();

        Self::list(db, &spec).await
    }

    /// `deleted=true` lists the trash, anything else the live set.
    #[instrument(skip(db))]
    pub async fn get_articles(
        db: &PgPool,
        filters: ArticleFilterParams,
    ) -> Result<PaginatedArticlesResponse, AppError> {
        let builder =
            QuerySpec::builder(&filters.pagination).contains("title", filters.title.as_deref());
        let spec = if filters.deleted.unwrap_or(false) {
            builder.is_not_null("deleted_at")
        } else {
            builder.is_null("deleted_at")
        }
        .build();

        Self::list(db, &spec).await
    }

    #[instrument(skip(db))]
    pub async fn get_public_article(db: &PgPool, id: i64) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM articles WHERE id = $1 AND deleted_at IS NULL",
            ARTICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Article not found")))
    }

    /// Finds an article whether or not it is trashed.
    #[instrument(skip(db))]
    pub async fn get_article(db: &PgPool, id: i64) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM articles WHERE id = $1",
            ARTICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Article not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create_article(db: &PgPool, dto: CreateArticleDto) -> Result<Article, AppError> {
        let article = sqlx::query_as::<_, Article>(&format!(
            "INSERT INTO articles (title, content) VALUES ($1, $2) RETURNING {}",
            ARTICLE_COLUMNS
        ))
        .bind(dto.title)
        .bind(dto.content)
        .fetch_one(db)
        .await?;

        Ok(article)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_article(
        db: &PgPool,
        id: i64,
        dto: UpdateArticleDto,
    ) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(&format!(
            "UPDATE articles SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            ARTICLE_COLUMNS
        ))
        .bind(id)
        .bind(dto.title)
        .bind(dto.content)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Article not found")))
    }

    /// Moves one live article to the trash.
    #[instrument(skip(db))]
    pub async fn delete_article(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Article not found")));
        }

        Ok(())
    }

    /// Trashes every live article in `ids`. Returns how many moved.
    #[instrument(skip(db))]
    pub async fn delete_articles(db: &PgPool, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = NOW() WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(ids)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn restore_articles(db: &PgPool, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = NULL WHERE id = ANY($1) AND deleted_at IS NOT NULL",
        )
        .bind(ids)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }

    /// Permanently removes the given articles, trashed or not.
    #[instrument(skip(db))]
    pub async fn force_delete_articles(db: &PgPool, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ANY($1)")
            .bind(ids)
            .execute(db)
            .await?;

        info!(affected = result.rows_affected(), "Articles permanently deleted");

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::ErrorKind;

    async fn create(pool: &PgPool, title: &str) -> Article {
        ArticleService::create_article(
            pool,
            CreateArticleDto {
                title: title.to_string(),
                content: None,
            },
        )
        .await
        .unwrap()
    }

    fn admin_filters(deleted: Option<bool>) -> ArticleFilterParams {
        ArticleFilterParams {
            title: None,
            deleted,
            pagination: PaginationParams::default(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_soft_delete_hides_from_public(pool: PgPool) {
        let article = create(&pool, "Hello").await;
        ArticleService::delete_article(&pool, article.id)
            .await
            .unwrap();

        let err = ArticleService::get_public_article(&pool, article.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let trashed = ArticleService::get_article(&pool, article.id)
            .await
            .unwrap();
        assert!(trashed.deleted_at.is_some());

        let err = ArticleService::delete_article(&pool, article.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_batch_delete_restore_and_force_delete(pool: PgPool) {
        let a = create(&pool, "A").await;
        let b = create(&pool, "B").await;
        let c = create(&pool, "C").await;

        let moved = ArticleService::delete_articles(&pool, &[a.id, b.id])
            .await
            .unwrap();
        assert_eq!(moved, 2);

        let trash = ArticleService::get_articles(&pool, admin_filters(Some(true)))
            .await
            .unwrap();
        assert_eq!(trash.pagination.total, 2);

        let live = ArticleService::get_articles(&pool, admin_filters(None))
            .await
            .unwrap();
        assert_eq!(live.articles[0].id, c.id);

        let restored = ArticleService::restore_articles(&pool, &[a.id, c.id])
            .await
            .unwrap();
        assert_eq!(restored, 1);

        let removed = ArticleService::force_delete_articles(&pool, &[a.id, b.id, c.id])
            .await
            .unwrap();
        assert_eq!(removed, 3);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_public_list_filters_title(pool: PgPool) {
        create(&pool, "Rust news").await;
        create(&pool, "Go news").await;
        create(&pool, "100% off").await;

        let page = ArticleService::get_public_articles(
            &pool,
            Some("Rust"),
            &PaginationParams::default(),
        )
        .await
        .unwrap();
        assert_eq!(page.pagination.total, 1);

        let page = ArticleService::get_public_articles(
            &pool,
            Some("%"),
            &PaginationParams::default(),
        )
        .await
        .unwrap();
        assert_eq!(page.pagination.total, 1);
    }
}
