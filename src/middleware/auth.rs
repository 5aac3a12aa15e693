use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use coursehub_auth::verify_token;
use coursehub_config::JwtConfig;
use coursehub_core::AppError;

use crate::state::AppState;

/// Request header carrying the access token.
pub const TOKEN_HEADER: &str = "token";

/// Identity of a verified normal-surface caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

pub fn extract_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("token required"))
}

/// Reads and verifies the token header.
///
/// Verification failures are logged with their reason before being returned
/// as `TokenMalformed` or `TokenExpired`.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<CurrentUser, AppError> {
    let token = extract_token(headers)?;

    let claims = verify_token(token, jwt_config).inspect_err(|err| {
        warn!(kind = ?err.kind, reason = %err.error, "Token verification failed");
    })?;

    Ok(CurrentUser {
        id: claims.user_id()?,
    })
}

pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(*user);
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use coursehub_auth::{TOKEN_TTL_SECONDS, issue_token, issue_token_at};
    use coursehub_core::ErrorKind;

    fn config() -> JwtConfig {
        JwtConfig::new("middleware_test_secret")
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = authenticate(&HeaderMap::new(), &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.messages(), vec!["token required".to_string()]);
    }

    #[test]
    fn test_blank_header_is_unauthorized() {
        let err = authenticate(&headers_with("  "), &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_valid_token_yields_user() {
        let token = issue_token(9, &config()).unwrap();
        let user = authenticate(&headers_with(&token), &config()).unwrap();
        assert_eq!(user, CurrentUser { id: 9 });
    }

    #[test]
    fn test_malformed_token() {
        let err = authenticate(&headers_with("not.a.token"), &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenMalformed);
    }

    #[test]
    fn test_expired_token() {
        let issued = chrono::Utc::now().timestamp() - TOKEN_TTL_SECONDS - 60;
        let token = issue_token_at(9, issued, &config()).unwrap();

        let err = authenticate(&headers_with(&token), &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }
}
