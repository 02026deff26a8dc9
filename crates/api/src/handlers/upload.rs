//! Handler for `POST /upload`: store a single image and return its URL.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::upload::{
    check_upload_size, file_too_large, validate_image_upload, NO_FILE_UPLOADED,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::UploadResponse;
use crate::state::AppState;

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// POST /api/upload
///
/// Accepts a multipart form with a `file` field. Other fields are ignored.
/// The file type is checked before the body is read; the size is checked
/// while streaming.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let max_bytes = state.config.max_upload_bytes;
    let mut stored: Option<(String, Vec<u8>)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) || stored.is_some() {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let ext = validate_image_upload(&filename, content_type.as_deref(), 0, max_bytes)?;

        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?
        {
            check_upload_size(data.len() + chunk.len(), max_bytes)?;
            data.extend_from_slice(&chunk);
        }

        stored = Some((ext, data));
    }

    let (ext, data) =
        stored.ok_or_else(|| AppError::Core(CoreError::UploadRejected(NO_FILE_UPLOADED.into())))?;

    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    let stored_filename = format!("{}.{ext}", Uuid::now_v7());
    tokio::fs::write(upload_dir.join(&stored_filename), &data)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    tracing::info!(file = %stored_filename, bytes = data.len(), "Image uploaded");

    Ok(Json(UploadResponse {
        url: format!("{}/uploads/{stored_filename}", state.config.public_base_url),
    }))
}

/// Body-limit failures are reported as an oversized upload; anything else
/// is a malformed request.
fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Core(file_too_large(max_bytes));
    }
    AppError::BadRequest(err.body_text())
}
