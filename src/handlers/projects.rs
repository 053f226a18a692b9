//! /api/projects routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::db::records::RecordOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::ProjectFields;
use crate::validation::Validate;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordOut<ProjectFields>>>, ApiError> {
    let projects = state
        .projects()
        .list()
        .await
        .map_err(|e| e.into_api("project"))?;

    Ok(Json(projects.into_iter().map(RecordOut::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<ProjectFields>,
) -> Result<Json<RecordOut<ProjectFields>>, ApiError> {
    fields.validate()?;

    let project = state
        .projects()
        .create(fields)
        .await
        .map_err(|e| e.into_api("project"))?;

    Ok(Json(project.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<ProjectFields>,
) -> Result<Json<RecordOut<ProjectFields>>, ApiError> {
    fields.validate()?;

    let project = state
        .projects()
        .replace(&id, fields)
        .await
        .map_err(|e| e.into_api("project"))?;

    Ok(Json(project.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .projects()
        .delete(&id)
        .await
        .map_err(|e| e.into_api("project"))?;

    Ok(Json(json!({ "message": "Project deleted successfully" })))
}
