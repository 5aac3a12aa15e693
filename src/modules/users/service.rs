use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use coursehub_core::query::Direction;
use coursehub_core::{AppError, QuerySpec, hash_password_async, verify_password_async};
use coursehub_db::fetch_page;
use coursehub_models::users::{SEX_UNSPECIFIED, USER_COLUMNS};
use coursehub_models::{
    AdminCreateUserDto, AdminUpdateUserDto, PaginatedUsersResponse, UpdateAccountDto,
    UpdateUserInfoDto, User, UserCredentials, UserFilterParams, UserRole,
};

/// A validated role value from an admin request.
fn parse_role(role: Option<i16>) -> Result<Option<UserRole>, AppError> {
    role.map(|value| {
        UserRole::try_from(value).map_err(|_| AppError::invalid_field("role must be 0 or 100"))
    })
    .transpose()
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// Looks up credentials by email or username.
    #[instrument(skip(db))]
    pub async fn find_credentials(
        db: &PgPool,
        login: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, password, role FROM users WHERE email = $1 OR username = $1 LIMIT 1",
        )
        .bind(login)
        .fetch_optional(db)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(db, password))]
    pub async fn insert_user(
        db: &PgPool,
        email: &str,
        username: &str,
        nickname: &str,
        password: &str,
        sex: i16,
        role: UserRole,
    ) -> Result<User, AppError> {
        let digest = hash_password_async(password.to_string()).await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, nickname, password, sex, role)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(email)
        .bind(username)
        .bind(nickname)
        .bind(digest)
        .bind(sex)
        .bind(i16::from(role))
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn update_info(
        db: &PgPool,
        id: i64,
        dto: UpdateUserInfoDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                nickname = COALESCE($2, nickname),
                sex = COALESCE($3, sex),
                company = COALESCE($4, company),
                introduce = COALESCE($5, introduce),
                avatar = COALESCE($6, avatar),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(dto.nickname)
        .bind(dto.sex)
        .bind(dto.company)
        .bind(dto.introduce)
        .bind(dto.avatar)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        Ok(user)
    }

    /// Changes email, username or password after checking the current
    /// password.
    #[instrument(skip(db, dto))]
    pub async fn update_account(
        db: &PgPool,
        id: i64,
        dto: UpdateAccountDto,
    ) -> Result<User, AppError> {
        if dto.password.is_some() && dto.password != dto.password_confirmation {
            return Err(AppError::invalid_field(
                "password confirmation does not match",
            ));
        }

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        if !verify_password_async(dto.current_password, stored).await? {
            return Err(AppError::invalid_field("current password is incorrect"));
        }

        let digest = match dto.password {
            Some(password) => Some(hash_password_async(password).await?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                username = COALESCE($3, username),
                password = COALESCE($4, password),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(dto.email)
        .bind(dto.username)
        .bind(digest)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let spec = QuerySpec::builder(&filters.pagination)
            .contains("email", filters.email.as_deref())
            .contains("username", filters.username.as_deref())
            .contains("nickname", filters.nickname.as_deref())
            .eq("role", filters.role)
            .order_by("id", Direction::Desc)
            .build();

        let (users, total) = fetch_page::<User>(db, USER_COLUMNS, "users", &spec).await?;

        Ok(PaginatedUsersResponse {
            users,
            pagination: spec.meta(total),
        })
    }

    /// Creates a user with its profile fields in a single statement.
    #[instrument(skip(db, dto))]
    pub async fn admin_create_user(db: &PgPool, dto: AdminCreateUserDto) -> Result<User, AppError> {
        let role = parse_role(dto.role)?.unwrap_or(UserRole::Normal);
        let digest = hash_password_async(dto.password).await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, nickname, password, sex, role, avatar, company, introduce)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(dto.email)
        .bind(dto.username)
        .bind(dto.nickname)
        .bind(digest)
        .bind(dto.sex.unwrap_or(SEX_UNSPECIFIED))
        .bind(i16::from(role))
        .bind(dto.avatar)
        .bind(dto.company)
        .bind(dto.introduce)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn admin_update_user(
        db: &PgPool,
        id: i64,
        dto: AdminUpdateUserDto,
    ) -> Result<User, AppError> {
        let role = parse_role(dto.role)?.map(i16::from);
        let digest = match dto.password {
            Some(password) => Some(hash_password_async(password).await?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                username = COALESCE($3, username),
                nickname = COALESCE($4, nickname),
                password = COALESCE($5, password),
                sex = COALESCE($6, sex),
                role = COALESCE($7, role),
                avatar = COALESCE($8, avatar),
                company = COALESCE($9, company),
                introduce = COALESCE($10, introduce),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(dto.email)
        .bind(dto.username)
        .bind(dto.nickname)
        .bind(digest)
        .bind(dto.sex)
        .bind(role)
        .bind(dto.avatar)
        .bind(dto.company)
        .bind(dto.introduce)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::{ErrorKind, PaginationParams};

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role(None).unwrap(), None);
        assert_eq!(parse_role(Some(100)).unwrap(), Some(UserRole::Admin));
        let err = parse_role(Some(5)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Validation(_)));
    }

    async fn create(pool: &PgPool, username: &str, role: UserRole) -> User {
        UserService::insert_user(
            pool,
            &format!("{}@coursehub.test", username),
            username,
            username,
            "secret123",
            SEX_UNSPECIFIED,
            role,
        )
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_insert_and_find_user(pool: PgPool) {
        let user = create(&pool, "alice", UserRole::Normal).await;

        let found = UserService::find_by_id(&pool, user.id).await.unwrap();
        assert_eq!(found, Some(user.clone()));

        let credentials = UserService::find_credentials(&pool, "alice@coursehub.test")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(credentials.id, user.id);
        assert_ne!(credentials.password, "secret123");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_duplicate_username_is_validation_error(pool: PgPool) {
        create(&pool, "bob", UserRole::Normal).await;

        let err = UserService::insert_user(
            &pool,
            "other@coursehub.test",
            "bob",
            "Bob",
            "secret123",
            SEX_UNSPECIFIED,
            UserRole::Normal,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.kind,
            ErrorKind::Validation(vec!["username already exists".to_string()])
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_get_users_filters_compose(pool: PgPool) {
        create(&pool, "carol", UserRole::Admin).await;
        create(&pool, "caroline", UserRole::Normal).await;
        create(&pool, "dave", UserRole::Admin).await;

        let filters = UserFilterParams {
            email: None,
            username: Some("carol".to_string()),
            nickname: None,
            role: Some(100),
            pagination: PaginationParams::default(),
        };
        let page = UserService::get_users(&pool, filters).await.unwrap();

        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.users[0].username, "carol");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_admin_create_user_stores_profile(pool: PgPool) {
        let dto = AdminCreateUserDto {
            email: "ivy@coursehub.test".to_string(),
            username: "ivy".to_string(),
            nickname: "Ivy".to_string(),
            password: "secret123".to_string(),
            sex: Some(1),
            role: Some(100),
            avatar: Some("https://cdn.test/ivy.png".to_string()),
            company: Some("Acme".to_string()),
            introduce: Some("Hello".to_string()),
        };
        let user = UserService::admin_create_user(&pool, dto).await.unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.sex, 1);
        assert_eq!(user.avatar.as_deref(), Some("https://cdn.test/ivy.png"));
        assert_eq!(user.company.as_deref(), Some("Acme"));
        assert_eq!(user.introduce.as_deref(), Some("Hello"));
        assert_eq!(UserService::find_by_id(&pool, user.id).await.unwrap(), Some(user));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_admin_create_user_rejects_role_before_insert(pool: PgPool) {
        let dto = AdminCreateUserDto {
            email: "jay@coursehub.test".to_string(),
            username: "jay".to_string(),
            nickname: "Jay".to_string(),
            password: "secret123".to_string(),
            sex: None,
            role: Some(7),
            avatar: None,
            company: Some("Acme".to_string()),
            introduce: None,
        };
        let err = UserService::admin_create_user(&pool, dto).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Validation(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_update_account_requires_current_password(pool: PgPool) {
        let user = create(&pool, "erin", UserRole::Normal).await;

        let dto = UpdateAccountDto {
            email: None,
            username: Some("erin2".to_string()),
            password: None,
            password_confirmation: None,
            current_password: "wrong-password".to_string(),
        };
        let err = UserService::update_account(&pool, user.id, dto)
            .await
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Validation(_)));

        let dto = UpdateAccountDto {
            email: None,
            username: Some("erin2".to_string()),
            password: None,
            password_confirmation: None,
            current_password: "secret123".to_string(),
        };
        let updated = UserService::update_account(&pool, user.id, dto)
            .await
            .unwrap();
        assert_eq!(updated.username, "erin2");
    }
}
