use axum::http::{HeaderMap, HeaderValue};
use coursehub::coursehub_auth::{TOKEN_TTL_SECONDS, issue_token, issue_token_at, verify_token};
use coursehub::coursehub_config::JwtConfig;
use coursehub::coursehub_core::ErrorKind;
use coursehub::middleware::auth::{CurrentUser, TOKEN_HEADER, authenticate, extract_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new("test_secret_key_for_testing_purposes")
}

fn headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
    headers
}

#[test]
fn test_token_round_trips_through_header() {
    let jwt_config = get_test_jwt_config();
    let token = issue_token(1234, &jwt_config).unwrap();

    let user = authenticate(&headers(&token), &jwt_config).unwrap();
    assert_eq!(user, CurrentUser { id: 1234 });
}

#[test]
fn test_header_value_is_trimmed() {
    let token = issue_token(5, &get_test_jwt_config()).unwrap();
    let padded = format!("  {}  ", token);

    assert_eq!(extract_token(&headers(&padded)).unwrap(), token);
}

#[test]
fn test_claims_lifetime_is_thirty_days() {
    let jwt_config = get_test_jwt_config();
    let token = issue_token(1, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    assert_eq!(claims.user_id().unwrap(), 1);
}

#[test]
fn test_expired_and_foreign_tokens_differ() {
    let jwt_config = get_test_jwt_config();

    let issued = chrono::Utc::now().timestamp() - TOKEN_TTL_SECONDS - 1;
    let expired = issue_token_at(1, issued, &jwt_config).unwrap();
    let err = authenticate(&headers(&expired), &jwt_config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenExpired);
    assert_eq!(err.messages(), vec!["Expired Token".to_string()]);

    let foreign = issue_token(1, &JwtConfig::new("another_secret")).unwrap();
    let err = authenticate(&headers(&foreign), &jwt_config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenMalformed);
    assert_eq!(err.messages(), vec!["Wrong Token".to_string()]);
}
