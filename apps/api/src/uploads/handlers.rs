use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::BytesMut;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;
use crate::uploads::storage::MAX_UPLOAD_BYTES;

/// Multipart field carrying the photo.
pub const PHOTO_FIELD: &str = "foto";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
}

/// POST /api/upload
///
/// Accepts one image in the `foto` field. Type and size are checked before
/// anything touches the disk.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Upload without multipart body: {}", e.body_text());
        AppError::NoFile
    })?;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(PHOTO_FIELD) || field.file_name().is_none() {
            // Unread data is skipped by the next call to next_field.
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let is_image = field
            .content_type()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            info!(
                file = %original_name,
                content_type = ?field.content_type(),
                "Rejected non-image upload"
            );
            return Err(AppError::UnsupportedMediaType);
        }

        let mut data = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                info!(file = %original_name, "Rejected oversized upload");
                return Err(AppError::FileTooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        let asset = state
            .uploads
            .save(&original_name, &data)
            .await
            .map_err(|e| AppError::UploadFailed(format!("{e:#}")))?;
        return Ok(Json(UploadResponse {
            success: true,
            message: "Photo updated successfully!".to_string(),
            url: asset.url,
        }));
    }

    Err(AppError::NoFile)
}

/// A body cut off by the request size limit reads as an oversized file.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge
    } else {
        AppError::UploadFailed(e.body_text())
    }
}
