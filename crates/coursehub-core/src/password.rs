//! Password length policy, hashing and verification.
//!
//! Hashes are bcrypt digests at [`DEFAULT_COST`] with a random salt. bcrypt is
//! CPU-bound, so request handlers should use the `_async` variants which run
//! on the blocking thread pool.

use anyhow::Context;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 45;
/// bcrypt only reads this many bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Rejects plaintexts outside 6..=45 characters or longer than 72 bytes.
pub fn validate_password_length(password: &str) -> Result<(), AppError> {
    let length = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(AppError::invalid_field(format!(
            "password must be between {} and {} characters",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::invalid_field(format!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    validate_password_length(password)?;

    hash(password, DEFAULT_COST)
        .context("Failed to hash password")
        .map_err(AppError::internal)
}

/// Returns `Ok(false)` on mismatch. A digest that is not valid bcrypt is an
/// internal error, not a mismatch.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    verify(password, digest)
        .context("Failed to verify password")
        .map_err(AppError::internal)
}

pub async fn hash_password_async(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")
        .map_err(AppError::internal)?
}

pub async fn verify_password_async(password: String, digest: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .context("Password verification task failed")
        .map_err(AppError::internal)?
}
