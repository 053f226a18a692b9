//! /api/personal-info routes. The one singleton whose GET reports absence
//! with 404 instead of defaulting to an empty payload.

use axum::extract::State;
use axum::Json;

use crate::db::singleton::SingletonOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::PersonalInfo;
use crate::validation::Validate;

pub async fn get(State(state): State<AppState>) -> Result<Json<SingletonOut<PersonalInfo>>, ApiError> {
    let doc = state
        .personal_info()
        .fetch_existing()
        .await
        .map_err(|e| e.into_api("personal info"))?
        .ok_or_else(|| ApiError::not_found("Personal info not found"))?;

    Ok(Json(doc.into()))
}

pub async fn put(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<SingletonOut<PersonalInfo>>, ApiError> {
    info.validate()?;

    let doc = state
        .personal_info()
        .replace(info)
        .await
        .map_err(|e| e.into_api("personal info"))?;

    Ok(Json(doc.into()))
}
