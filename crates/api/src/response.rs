//! Small response bodies shared by handlers.

use serde::Serialize;

/// `{ "message": ... }` confirmation body, returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "url": ... }` body returned by the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
