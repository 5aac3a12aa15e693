//! # CourseHub Auth
//!
//! Access token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user id as `sub`. They live for
//! [`TOKEN_TTL_SECONDS`] (30 days) and cannot be revoked.
//!
//! ```ignore
//! use coursehub_auth::{issue_token, verify_token};
//! use coursehub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(user.id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, user.id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TOKEN_TTL_SECONDS, issue_token, issue_token_at, verify_token, verify_token_at};
