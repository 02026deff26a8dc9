//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::project::{validate_project, ProjectPayload};
use folio_core::types::{DbId, ListOrder};
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProjectPayload>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = validate_project(&payload)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
///
/// Most recently created first unless `?order=` says otherwise.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let order = params.order.unwrap_or(ListOrder::Newest);
    let projects = ProjectRepo::list(&state.pool, order).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Full replacement: every field must be supplied again.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(payload): AppJson<ProjectPayload>,
) -> AppResult<Json<Project>> {
    let input = validate_project(&payload)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}
