use std::env;

/// Signing material for access tokens.
///
/// Loaded once at startup and passed explicitly to the issuer and the
/// verifier. The token lifetime is fixed and lives in `coursehub-auth`.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
        }
    }
}
