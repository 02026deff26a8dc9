//! HTTP-level integration tests for `POST /api/upload` and `/uploads` serving.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_multipart};
use sqlx::PgPool;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_image_stores_file_and_returns_url(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(dir.path());

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = post_multipart(app, "/api/upload", "file", "logo.PNG", "image/png", PNG_BYTES).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let url = json["url"].as_str().unwrap();
    let filename = url
        .strip_prefix("http://localhost:5000/uploads/")
        .expect("url should use the public base URL");
    assert!(filename.ends_with(".png"));

    let on_disk = std::fs::read(dir.path().join(filename)).unwrap();
    assert_eq!(on_disk, PNG_BYTES);

    // The stored file is served back under /uploads.
    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, &format!("/uploads/{filename}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_executable_returns_400(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_config(pool, common::test_config(dir.path()));

    let response = post_multipart(
        app,
        "/api/upload",
        "file",
        "setup.exe",
        "application/octet-stream",
        b"MZ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only images (jpeg, jpg, png, gif) are allowed!");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_without_file_field_returns_400(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_config(pool, common::test_config(dir.path()));

    let response = post_multipart(app, "/api/upload", "avatar", "a.png", "image/png", PNG_BYTES).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No file uploaded");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_over_size_limit_returns_400(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(dir.path());
    let oversized = vec![0u8; config.max_upload_bytes + 1];
    let app = common::build_test_app_with_config(pool, config);

    let response = post_multipart(app, "/api/upload", "file", "big.gif", "image/gif", &oversized).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPLOAD_REJECTED");
    assert!(json["error"].as_str().unwrap().starts_with("File too large"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn disk_failure_returns_500(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the upload directory should be.
    let blocked = dir.path().join("not-a-dir");
    std::fs::write(&blocked, b"").unwrap();
    let app = common::build_test_app_with_config(pool, common::test_config(&blocked));

    let response = post_multipart(app, "/api/upload", "file", "a.png", "image/png", PNG_BYTES).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_is_not_bound_by_request_timeout(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config(dir.path());
    config.request_timeout_secs = 0;
    config.upload_timeout_secs = 30;
    let app = common::build_test_app_with_config(pool, config);

    let response = post_multipart(app, "/api/upload", "file", "a.png", "image/png", PNG_BYTES).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["url"].is_string());
}
