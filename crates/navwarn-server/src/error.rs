//! Error responses of the S-124 HTTP API.
//!
//! [`ApiError`] implements [`axum::response::IntoResponse`] so handlers can
//! return `Result<…, ApiError>` directly.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use navwarn_s124::ServiceError;
use serde_json::json;

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Export or schema lookup failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Service(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        tracing::error!(%status, error = %message, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
