//! /api/skills routes. The wire shape is the bare skill list; the singleton
//! document wrapping it stays internal.

use axum::extract::State;
use axum::Json;

use crate::db::AppState;
use crate::error::ApiError;
use crate::models::{Skill, SkillsPayload};
use crate::validation::Validate;

pub async fn get(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    let doc = state
        .skills()
        .fetch()
        .await
        .map_err(|e| e.into_api("skills"))?;

    Ok(Json(doc.payload.skills))
}

pub async fn put(
    State(state): State<AppState>,
    Json(skills): Json<Vec<Skill>>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let payload = SkillsPayload { skills };
    payload.validate()?;

    let doc = state
        .skills()
        .replace(payload)
        .await
        .map_err(|e| e.into_api("skills"))?;

    Ok(Json(doc.payload.skills))
}
