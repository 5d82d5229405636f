// Panic recovery for the HTTP pipeline

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use common::response::ApiResponse;

/// Convert a handler panic into a 500 response.
///
/// The panic payload is logged server-side; the client only ever sees the
/// generic error envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiResponse::error("Internal server error"),
    )
        .into_response()
}
