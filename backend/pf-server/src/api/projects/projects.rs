//! Project REST API handlers
//!
//! List, create, retrieve, update, partial update and delete over every
//! stored project. No permission checks are applied.

use crate::{ApiError, ApiResult, AppState};

use pf_core::{ProjectDto, ProjectPayload, WriteMode};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects/
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.projects().find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// POST /api/projects/
///
/// Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(data) = body?;

    let new_project = ProjectPayload::from_json(&data, WriteMode::Create)?.into_new_project()?;
    let project = state.projects().create(&new_project).await?;

    log::info!(
        "Created project {} ({}) via REST API",
        project.id,
        project.title
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/projects/{id}/
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(&id)?;

    let project = state
        .projects()
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::project_not_found(&id))?;

    Ok(Json(project.into()))
}

/// PUT /api/projects/{id}/
///
/// Replace every writable field of a project
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    save_changes(&state, &id, body, WriteMode::Update).await
}

/// PATCH /api/projects/{id}/
///
/// Change only the writable fields present in the body
pub async fn partial_update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    save_changes(&state, &id, body, WriteMode::PartialUpdate).await
}

/// DELETE /api/projects/{id}/
///
/// Delete a project
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let project_id = parse_project_id(&id)?;

    if !state.projects().delete(project_id).await? {
        return Err(ApiError::project_not_found(&id));
    }

    log::info!("Deleted project {} via REST API", project_id);

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

/// Ids that are not integers cannot match any row, so they are reported as
/// not found rather than as bad input.
#[track_caller]
fn parse_project_id(id: &str) -> ApiResult<i64> {
    id.parse::<i64>().map_err(|_| ApiError::project_not_found(id))
}

async fn save_changes(
    state: &AppState,
    id: &str,
    body: Result<Json<Value>, JsonRejection>,
    mode: WriteMode,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(id)?;
    let repo = state.projects();

    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::project_not_found(id))?;

    // The body is only looked at once the project is known to exist
    let Json(data) = body?;
    let payload = ProjectPayload::from_json(&data, mode)?;
    project.apply(payload);

    // Row deleted between the read and the write
    if !repo.update(&project).await? {
        return Err(ApiError::project_not_found(id));
    }

    log::info!(
        "Updated project {} ({}) via REST API",
        project.id,
        project.title
    );

    Ok(Json(project.into()))
}
