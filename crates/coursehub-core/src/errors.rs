//! Application error type and the failure half of the response envelope.
//!
//! Every handler returns `Result<_, AppError>`. The error carries an
//! [`ErrorKind`] that decides the HTTP status and the JSON body written to the
//! client, so a request can only ever produce one failure response.
//!
//! | Kind | Status | `message` | detail field |
//! |------|--------|-----------|--------------|
//! | `Validation` | 400 | `Validation error` | `errors: [..field messages]` |
//! | `NotFound` | 404 | `Resource not exists` | `errors: [message]` |
//! | `BadRequest` | 400 | `Wrong Request Parameters` | `errors: [message]` |
//! | `Unauthorized` | 401 | `Verification failed` | `errors: [message]` |
//! | `TokenMalformed` | 401 | `Verification failed` | `errors: ["Wrong Token"]` |
//! | `TokenExpired` | 401 | `Verification failed` | `errors: ["Expired Token"]` |
//! | `Internal` | 500 | `Internal server error` | `error: [message]` |

use std::fmt;

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error, warn};
use validator::ValidationErrors;

/// Classification of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// One message per failing field.
    Validation(Vec<String>),
    NotFound,
    BadRequest,
    Unauthorized,
    TokenMalformed,
    TokenExpired,
    Internal,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::Validation(_) | ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized | ErrorKind::TokenMalformed | ErrorKind::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope `message` for this kind.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorKind::Validation(_) => "Validation error",
            ErrorKind::NotFound => "Resource not exists",
            ErrorKind::BadRequest => "Wrong Request Parameters",
            ErrorKind::Unauthorized | ErrorKind::TokenMalformed | ErrorKind::TokenExpired => {
                "Verification failed"
            }
            ErrorKind::Internal => "Internal server error",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

/// JSON body written for every failed request.
#[derive(Debug, Serialize)]
struct FailureBody {
    status: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Vec<String>>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn validation(messages: Vec<String>) -> Self {
        let error = anyhow!("{}", messages.join(", "));
        Self {
            kind: ErrorKind::Validation(messages),
            error,
        }
    }

    /// Shorthand for a validation failure on a single field.
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::validation(vec![message.into()])
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, anyhow!(message.into()))
    }

    pub fn token_malformed<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::TokenMalformed, err)
    }

    pub fn token_expired<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::TokenExpired, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::internal(anyhow!(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// Client-facing detail messages for this error.
    ///
    /// Only the outermost message of the error chain is exposed; lower
    /// layers (driver errors, I/O) stay in the logs.
    pub fn messages(&self) -> Vec<String> {
        match &self.kind {
            ErrorKind::Validation(messages) => messages.clone(),
            ErrorKind::TokenMalformed => vec!["Wrong Token".to_string()],
            ErrorKind::TokenExpired => vec!["Expired Token".to_string()],
            _ => vec![self.error.to_string()],
        }
    }

    fn body(&self) -> FailureBody {
        let messages = self.messages();
        let (errors, error) = match self.kind {
            ErrorKind::Internal => (None, Some(messages)),
            _ => (Some(messages), None),
        };

        FailureBody {
            status: false,
            message: self.kind.summary(),
            errors,
            error,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.summary(), self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind {
            ErrorKind::Internal => error!(error = %format!("{:#}", self.error), "Request failed"),
            ErrorKind::Unauthorized | ErrorKind::TokenMalformed | ErrorKind::TokenExpired => {
                warn!(kind = ?self.kind, reason = %self.error, "Authentication rejected")
            }
            _ => debug!(kind = ?self.kind, reason = %self.error, "Request rejected"),
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        AppError::validation(messages)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found(anyhow!("Resource not found")),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::invalid_field(unique_violation_message(db_err.constraint()))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::bad_request(anyhow!("Referenced record does not exist"))
            }
            _ => AppError::internal(anyhow::Error::new(err).context("Database operation failed")),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err)
    }
}

/// Turns a Postgres default unique constraint name (`users_email_key`) into
/// a field message (`email already exists`).
fn unique_violation_message(constraint: Option<&str>) -> String {
    constraint
        .and_then(|name| name.strip_suffix("_key"))
        .and_then(|name| name.split_once('_'))
        .map(|(_, column)| format!("{} already exists", column))
        .unwrap_or_else(|| "Record already exists".to_string())
}
