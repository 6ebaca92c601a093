use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::uploads::storage::MAX_UPLOAD_BYTES;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No file sent.")]
    NoFile,

    #[error("Only images are permitted!")]
    UnsupportedMediaType,

    #[error("File too large (max {}MB)", MAX_UPLOAD_BYTES / (1024 * 1024))]
    FileTooLarge,

    #[error("Upload error: {0}")]
    UploadFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NoFile | AppError::UnsupportedMediaType | AppError::FileTooLarge => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::UploadFailed(detail) => {
                tracing::warn!("Upload rejected: {detail}");
                (
                    StatusCode::BAD_REQUEST,
                    "Error uploading file".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}
