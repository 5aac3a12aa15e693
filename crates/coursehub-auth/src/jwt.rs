//! Token issuing and verification.
//!
//! Expiry is checked here rather than by `jsonwebtoken` so that an expired
//! token and a tampered one map to different error kinds, and so tests can
//! verify against an explicit clock.

use anyhow::{Context, anyhow};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use coursehub_config::JwtConfig;
use coursehub_core::AppError;

use crate::claims::Claims;

/// Token lifetime: 30 days.
pub const TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

pub fn issue_token(user_id: i64, jwt_config: &JwtConfig) -> Result<String, AppError> {
    issue_token_at(user_id, Utc::now().timestamp(), jwt_config)
}

/// Issues a token as if the current time were `iat`.
pub fn issue_token_at(user_id: i64, iat: i64, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECONDS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .context("Failed to create token")
    .map_err(AppError::internal)
}

/// Verifies signature and expiry against the current time.
///
/// # Errors
///
/// - `TokenMalformed` when the token cannot be decoded or the signature does
///   not match
/// - `TokenExpired` when the current time is past `exp`
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    verify_token_at(token, Utc::now().timestamp(), jwt_config)
}

pub fn verify_token_at(token: &str, now: i64, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::token_malformed(anyhow!("{}", e)))?;

    if now > claims.exp {
        return Err(AppError::token_expired(anyhow!(
            "token expired at {}",
            claims.exp
        )));
    }

    Ok(claims)
}
