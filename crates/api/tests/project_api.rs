//! HTTP-level integration tests for the `/api/projects` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

const FIELDS: [&str; 7] = [
    "title",
    "image",
    "platform",
    "category",
    "liveView",
    "timelines",
    "services",
];

fn project(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "image": "http://localhost:5000/uploads/p.png",
        "platform": "Web",
        "category": "Design",
        "liveView": "https://example.com",
        "timelines": "3 months",
        "services": "UI/UX"
    })
}

async fn create_project(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_trims_fields(pool: PgPool) {
    let mut body = project("  Portfolio  ");
    body["platform"] = json!(" Web ");
    let json = create_project(&pool, body).await;

    assert!(json["id"].is_number());
    assert!(json["createdAt"].is_string());
    assert_eq!(json["title"], "Portfolio");
    assert_eq!(json["platform"], "Web");
    assert_eq!(json["liveView"], "https://example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_missing_any_field_returns_400(pool: PgPool) {
    for field in FIELDS {
        let mut body = project("Portfolio");
        body.as_object_mut().unwrap().remove(field);

        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/projects", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "All fields are required");
    }

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/projects").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_non_string_field_returns_400(pool: PgPool) {
    let mut body = project("Portfolio");
    body["title"] = json!(5);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "All fields are required");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/projects").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_returns_400_with_error_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_defaults_to_newest_first(pool: PgPool) {
    let older = create_project(&pool, project("older")).await;
    let newer = create_project(&pool, project("newer")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/projects").await).await;
    let titles: Vec<_> = json.as_array().unwrap().iter().map(|p| p["title"].clone()).collect();
    assert_eq!(titles, vec![json!("newer"), json!("older")]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects?order=inserted").await).await;
    let ids: Vec<_> = json.as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, vec![older["id"].clone(), newer["id"].clone()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_requires_every_field(pool: PgPool) {
    let created = create_project(&pool, project("Before")).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/projects/{id}"), json!({"title": "After"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "All fields are required");

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/projects/{id}"), project("After")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "After");
    assert_eq!(json["createdAt"], created["createdAt"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/projects/999999", project("x")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_then_404(pool: PgPool) {
    let created = create_project(&pool, project("Gone")).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Project deleted successfully");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
