//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`media_proxy_common::Error`] so that route
//! handlers can return `Result<T, AppError>` and use `?` on library calls.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use media_proxy_common::Error;
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: Error,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self { inner }
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Range failures are signalled by the status code alone.
        if self.inner.is_range_error() {
            tracing::debug!(error = %self.inner, "Rejecting range request");
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in media handler"
            );
        }

        let body = json!({
            "success": false,
            "message": self.inner.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
