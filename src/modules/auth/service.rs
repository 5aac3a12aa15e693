use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use coursehub_auth::issue_token;
use coursehub_config::JwtConfig;
use coursehub_core::{AppError, verify_password_async};
use coursehub_models::users::SEX_UNSPECIFIED;
use coursehub_models::{SignInDto, SignUpDto, TokenResponse, User, UserRole};
use coursehub_observability::{
    track_token_issued, track_user_created, track_user_login_failure, track_user_login_success,
};

use crate::modules::users::service::UserService;

fn role_label(role: UserRole) -> &'static str {
    if role.is_admin() { "admin" } else { "normal" }
}

pub struct AuthService;

impl AuthService {
    /// Registers a normal user with an unspecified sex.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn sign_up(db: &PgPool, dto: SignUpDto) -> Result<User, AppError> {
        let user = UserService::insert_user(
            db,
            &dto.email,
            &dto.username,
            &dto.nickname,
            &dto.password,
            SEX_UNSPECIFIED,
            UserRole::Normal,
        )
        .await?;

        track_user_created(role_label(user.role));
        info!(user_id = user.id, "User signed up");

        Ok(user)
    }

    /// Checks credentials and issues a token.
    ///
    /// With `admin_only` set, a correct password still fails for anyone who
    /// is not an administrator.
    #[instrument(skip(db, dto, jwt_config), fields(login = %dto.login))]
    pub async fn sign_in(
        db: &PgPool,
        dto: SignInDto,
        jwt_config: &JwtConfig,
        admin_only: bool,
    ) -> Result<TokenResponse, AppError> {
        let Some(credentials) = UserService::find_credentials(db, &dto.login).await? else {
            track_user_login_failure("user_not_found");
            return Err(AppError::not_found(anyhow!("User not found")));
        };

        if !verify_password_async(dto.password, credentials.password).await? {
            warn!(user_id = credentials.id, "Wrong password");
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized("Wrong password"));
        }

        if admin_only && !credentials.role.is_admin() {
            warn!(user_id = credentials.id, "Non-admin attempted admin sign in");
            track_user_login_failure("not_admin");
            return Err(AppError::unauthorized("not authorized as admin"));
        }

        let token = issue_token(credentials.id, jwt_config)?;

        track_token_issued();
        track_user_login_success(role_label(credentials.role));
        info!(user_id = credentials.id, "User signed in");

        Ok(TokenResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_auth::verify_token;
    use coursehub_core::ErrorKind;

    fn jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret")
    }

    fn sign_up_dto(username: &str) -> SignUpDto {
        SignUpDto {
            email: format!("{}@coursehub.test", username),
            username: username.to_string(),
            nickname: username.to_string(),
            password: "secret123".to_string(),
        }
    }

    fn sign_in_dto(login: &str, password: &str) -> SignInDto {
        SignInDto {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_role_label() {
        assert_eq!(role_label(UserRole::Admin), "admin");
        assert_eq!(role_label(UserRole::Normal), "normal");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_sign_up_defaults(pool: PgPool) {
        let user = AuthService::sign_up(&pool, sign_up_dto("alice"))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::Normal);
        assert_eq!(user.sex, SEX_UNSPECIFIED);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_sign_up_duplicate_email(pool: PgPool) {
        AuthService::sign_up(&pool, sign_up_dto("alice"))
            .await
            .unwrap();

        let mut dto = sign_up_dto("alice2");
        dto.email = "alice@coursehub.test".to_string();
        let err = AuthService::sign_up(&pool, dto).await.unwrap_err();

        assert_eq!(
            err.kind,
            ErrorKind::Validation(vec!["email already exists".to_string()])
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_sign_in_by_email_or_username(pool: PgPool) {
        let user = AuthService::sign_up(&pool, sign_up_dto("bob"))
            .await
            .unwrap();
        let config = jwt_config();

        for login in ["bob", "bob@coursehub.test"] {
            let response =
                AuthService::sign_in(&pool, sign_in_dto(login, "secret123"), &config, false)
                    .await
                    .unwrap();
            let claims = verify_token(&response.token, &config).unwrap();
            assert_eq!(claims.user_id().unwrap(), user.id);
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_sign_in_failures(pool: PgPool) {
        AuthService::sign_up(&pool, sign_up_dto("carol"))
            .await
            .unwrap();
        let config = jwt_config();

        let err = AuthService::sign_in(&pool, sign_in_dto("nobody", "secret123"), &config, false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = AuthService::sign_in(&pool, sign_in_dto("carol", "wrong-pass"), &config, false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err = AuthService::sign_in(&pool, sign_in_dto("carol", "secret123"), &config, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.messages(), vec!["not authorized as admin".to_string()]);
    }
}
