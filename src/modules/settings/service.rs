use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use coursehub_core::AppError;
use coursehub_models::settings::SETTINGS_ID;
use coursehub_models::{Setting, UpdateSettingDto};

pub struct SettingService;

impl SettingService {
    /// The single settings row, seeded by the migrations.
    #[instrument(skip(db))]
    pub async fn get_setting(db: &PgPool) -> Result<Setting, AppError> {
        sqlx::query_as::<_, Setting>("SELECT id, name, icp, copyright FROM settings WHERE id = $1")
            .bind(SETTINGS_ID)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Settings not found")))
    }

    #[instrument(skip(db))]
    pub async fn update_setting(db: &PgPool, dto: UpdateSettingDto) -> Result<Setting, AppError> {
        sqlx::query_as::<_, Setting>(
            "UPDATE settings SET
                name = COALESCE($2, name),
                icp = COALESCE($3, icp),
                copyright = COALESCE($4, copyright)
             WHERE id = $1
             RETURNING id, name, icp, copyright",
        )
        .bind(SETTINGS_ID)
        .bind(dto.name)
        .bind(dto.icp)
        .bind(dto.copyright)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Settings not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_seeded_row_and_partial_update(pool: PgPool) {
        let setting = SettingService::get_setting(&pool).await.unwrap();
        assert_eq!(setting.id, SETTINGS_ID);

        let updated = SettingService::update_setting(
            &pool,
            UpdateSettingDto {
                name: None,
                icp: Some("ICP-0001".to_string()),
                copyright: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, setting.name);
        assert_eq!(updated.icp.as_deref(), Some("ICP-0001"));
    }
}
