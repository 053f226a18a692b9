//! /api/approach routes. Same bare-list wire shape as skills.

use axum::extract::State;
use axum::Json;

use crate::db::AppState;
use crate::error::ApiError;
use crate::models::{ApproachItem, ApproachPayload};
use crate::validation::Validate;

pub async fn get(State(state): State<AppState>) -> Result<Json<Vec<ApproachItem>>, ApiError> {
    let doc = state
        .approach()
        .fetch()
        .await
        .map_err(|e| e.into_api("approach"))?;

    Ok(Json(doc.payload.items))
}

pub async fn put(
    State(state): State<AppState>,
    Json(items): Json<Vec<ApproachItem>>,
) -> Result<Json<Vec<ApproachItem>>, ApiError> {
    let payload = ApproachPayload { items };
    payload.validate()?;

    let doc = state
        .approach()
        .replace(payload)
        .await
        .map_err(|e| e.into_api("approach"))?;

    Ok(Json(doc.payload.items))
}
