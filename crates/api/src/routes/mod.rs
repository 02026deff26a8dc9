pub mod form;
pub mod health;
pub mod project;
pub mod upload;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /forms                 list, create
/// /forms/{id}            get, update, delete
///
/// /projects              list, create
/// /projects/{id}         get, update, delete
///
/// /upload                single image upload (multipart)
/// ```
///
/// Resource routes time out after `request_timeout_secs`; the upload route
/// uses `upload_timeout_secs` instead.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/forms", form::router())
        .nest("/projects", project::router())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .nest(
            "/upload",
            upload::router(
                config.max_upload_bytes,
                Duration::from_secs(config.upload_timeout_secs),
            ),
        )
}
