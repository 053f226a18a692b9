//! /api/work-experience routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::db::records::RecordOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::WorkExperienceFields;
use crate::validation::Validate;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordOut<WorkExperienceFields>>>, ApiError> {
    let experience = state
        .work_experience()
        .list()
        .await
        .map_err(|e| e.into_api("work experience"))?;

    Ok(Json(experience.into_iter().map(RecordOut::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<WorkExperienceFields>,
) -> Result<Json<RecordOut<WorkExperienceFields>>, ApiError> {
    fields.validate()?;

    let experience = state
        .work_experience()
        .create(fields)
        .await
        .map_err(|e| e.into_api("work experience"))?;

    Ok(Json(experience.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<WorkExperienceFields>,
) -> Result<Json<RecordOut<WorkExperienceFields>>, ApiError> {
    fields.validate()?;

    let experience = state
        .work_experience()
        .replace(&id, fields)
        .await
        .map_err(|e| e.into_api("work experience"))?;

    Ok(Json(experience.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .work_experience()
        .delete(&id)
        .await
        .map_err(|e| e.into_api("work experience"))?;

    Ok(Json(json!({ "message": "Work experience deleted successfully" })))
}
