// Standard response envelope shared by all handlers

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Envelope wrapped around every JSON response body:
/// `{"status": "success"|"error", "message": "...", "data": ...}`.
/// `data` is omitted entirely when there is no payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::error(self.client_message());
        (status, body).into_response()
    }
}
