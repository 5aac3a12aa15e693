//! Success half of the response envelope.
//!
//! ```json
//! { "status": true, "message": "Course fetched", "data": { ... } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope written for every successful request.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    code: StatusCode,
    pub status: bool,
    pub message: String,
    pub data: T,
}

/// Serializes as `{}` for responses that carry no payload.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct EmptyData {}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, data)
    }

    pub fn with_status(code: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: true,
            message: message.into(),
            data,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }
}

impl ApiResponse<EmptyData> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(message, EmptyData {})
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ok_envelope() {
        let (status, body) = render(ApiResponse::ok("Settings fetched", json!({"name": "x"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "Settings fetched");
        assert_eq!(body["data"]["name"], "x");
        assert!(body.get("errors").is_none());
        assert!(body.get("code").is_none());
    }

    #[tokio::test]
    async fn test_created_envelope() {
        let (status, body) = render(ApiResponse::created("Category created", json!({"id": 1}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], true);
    }

    #[tokio::test]
    async fn test_message_only_envelope() {
        let (status, body) = render(ApiResponse::message("Category deleted")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({}));
    }
}
