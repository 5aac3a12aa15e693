use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use coursehub_core::AppError;

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim), as a decimal string
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Parses the subject back into a user id.
    ///
    /// A signed token with a non-numeric subject is treated as malformed.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| AppError::token_malformed(anyhow!("subject is not a user id")))
    }
}
