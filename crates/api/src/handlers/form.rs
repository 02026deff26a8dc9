//! Handlers for the `/forms` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::form::{validate_form, validate_form_patch, FormPayload};
use folio_core::types::{DbId, ListOrder};
use folio_db::models::form::Form;
use folio_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Form", id })
}

/// POST /api/forms
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FormPayload>,
) -> AppResult<(StatusCode, Json<Form>)> {
    let input = validate_form(&payload)?;
    let form = FormRepo::create(&state.pool, &input).await?;
    tracing::info!(id = form.id, sections = form.sections.len(), "Form created");
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/forms
///
/// Insertion order unless `?order=` says otherwise.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<Form>>> {
    let order = params.order.unwrap_or(ListOrder::Inserted);
    let forms = FormRepo::list(&state.pool, order).await?;
    Ok(Json(forms))
}

/// GET /api/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Form>> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(form))
}

/// PUT /api/forms/{id}
///
/// Partial update: omitted fields keep their stored value, a supplied
/// `sections` list replaces the stored one.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(payload): AppJson<FormPayload>,
) -> AppResult<Json<Form>> {
    let patch = validate_form_patch(&payload)?;
    let form = FormRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Form updated");
    Ok(Json(form))
}

/// DELETE /api/forms/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FormRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Form deleted");
    Ok(Json(MessageResponse {
        message: "Form deleted successfully",
    }))
}
