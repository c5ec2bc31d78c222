//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError, mapping the
//! internal error taxonomy onto the API's error envelope. Internal detail is
//! only exposed as the diagnostic string of upstream failures; everything
//! else is sanitized.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - Validation → 400 BAD_REQUEST, message verbatim
    /// - Upstream → 500 INTERNAL_SERVER_ERROR, generic message + diagnostic
    /// - Configuration / Internal → 500 INTERNAL_SERVER_ERROR, sanitized
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            AppError::Upstream { message, .. } => {
                tracing::error!(error = %message, "Upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Failed to fetch weather data").with_error(message),
                )
            }
            AppError::Configuration { .. } | AppError::Internal { .. } => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
