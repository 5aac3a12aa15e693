use sqlx::PgPool;
use tracing::instrument;

use coursehub_core::AppError;
use coursehub_models::{SexCount, UserMonthCount};

pub struct ChartService;

impl ChartService {
    /// Users per sex value, ascending by sex.
    #[instrument(skip(db))]
    pub async fn users_by_sex(db: &PgPool) -> Result<Vec<SexCount>, AppError> {
        let rows = sqlx::query_as::<_, SexCount>(
            "SELECT sex, COUNT(*) AS total FROM users GROUP BY sex ORDER BY sex ASC",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    /// Registrations per calendar month, oldest month first.
    #[instrument(skip(db))]
    pub async fn users_by_month(db: &PgPool) -> Result<Vec<UserMonthCount>, AppError> {
        let rows = sqlx::query_as::<_, UserMonthCount>(
            "SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month,
                    COUNT(*) AS total
             FROM users
             GROUP BY 1
             ORDER BY 1 ASC",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use coursehub_models::UserRole;

    use crate::modules::users::service::UserService;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_charts_count_users(pool: PgPool) {
        for (name, sex) in [("ann", 1), ("ben", 0), ("cat", 1)] {
            UserService::insert_user(
                &pool,
                &format!("{}@coursehub.test", name),
                name,
                name,
                "secret123",
                sex,
                UserRole::Normal,
            )
            .await
            .unwrap();
        }

        let by_sex = ChartService::users_by_sex(&pool).await.unwrap();
        assert_eq!(
            by_sex,
            vec![SexCount { sex: 0, total: 1 }, SexCount { sex: 1, total: 2 }]
        );

        let by_month = ChartService::users_by_month(&pool).await.unwrap();
        assert_eq!(by_month.len(), 1);
        assert_eq!(by_month[0].month, Utc::now().format("%Y-%m").to_string());
        assert_eq!(by_month[0].total, 3);
    }
}
