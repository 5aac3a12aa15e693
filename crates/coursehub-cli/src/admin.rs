//! Administrator account creation.

use sqlx::PgPool;

use coursehub_core::hash_password;
use coursehub_models::UserRole;
use coursehub_models::users::SEX_UNSPECIFIED;

/// Inserts an administrator. Fails when the email or username is taken.
pub async fn create_admin(
    db: &PgPool,
    email: &str,
    username: &str,
    nickname: &str,
    password: &str,
) -> Result<i64, Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Invalid password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, username, nickname, password, sex, role)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT DO NOTHING
         RETURNING id",
    )
    .bind(email)
    .bind(username)
    .bind(nickname)
    .bind(&hashed_password)
    .bind(SEX_UNSPECIFIED)
    .bind(i16::from(UserRole::Admin))
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| "A user with this email or username already exists".into())
}
