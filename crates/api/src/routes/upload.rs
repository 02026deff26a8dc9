//! Route definitions for `/upload`.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::upload;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST   /        -> upload_image
/// ```
pub fn router(max_upload_bytes: usize, timeout: Duration) -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
}
