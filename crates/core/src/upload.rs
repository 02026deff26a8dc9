//! Image upload acceptance rules.

use crate::error::CoreError;

/// Default maximum upload size: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Accepted file extensions (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Accepted MIME types when the client supplies one.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/gif"];

pub const ONLY_IMAGES_ALLOWED: &str = "Only images (jpeg, jpg, png, gif) are allowed!";

pub const NO_FILE_UPLOADED: &str = "No file uploaded";

/// Check an uploaded file and return its normalized (lowercase) extension.
///
/// The extension must be an allowed image type; a supplied content type must
/// agree; and the payload must not exceed `max_bytes`.
pub fn validate_image_upload(
    filename: &str,
    content_type: Option<&str>,
    size: usize,
    max_bytes: usize,
) -> Result<String, CoreError> {
    let ext = image_extension(filename)
        .ok_or_else(|| CoreError::UploadRejected(ONLY_IMAGES_ALLOWED.into()))?;

    if let Some(mime) = content_type {
        let mime = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        if !ALLOWED_IMAGE_MIME_TYPES.contains(&mime.as_str()) {
            return Err(CoreError::UploadRejected(ONLY_IMAGES_ALLOWED.into()));
        }
    }

    check_upload_size(size, max_bytes)?;

    Ok(ext)
}

/// Reject payloads larger than `max_bytes`. Also used while streaming.
pub fn check_upload_size(size: usize, max_bytes: usize) -> Result<(), CoreError> {
    if size > max_bytes {
        return Err(file_too_large(max_bytes));
    }
    Ok(())
}

/// The rejection reported for any upload over `max_bytes`.
pub fn file_too_large(max_bytes: usize) -> CoreError {
    CoreError::UploadRejected(format!("File too large (max {max_bytes} bytes)"))
}

/// Lowercase extension of `filename` if it is an allowed image type.
fn image_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let ext = ext.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}
