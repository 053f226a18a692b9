//! /api/metrics routes: the dashboard metrics singleton, exchanged as the
//! whole document.

use axum::extract::State;
use axum::Json;

use crate::db::singleton::SingletonOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::MetricsPayload;
use crate::validation::Validate;

pub async fn get(
    State(state): State<AppState>,
) -> Result<Json<SingletonOut<MetricsPayload>>, ApiError> {
    let doc = state
        .dashboard_metrics()
        .fetch()
        .await
        .map_err(|e| e.into_api("metrics"))?;

    Ok(Json(doc.into()))
}

pub async fn put(
    State(state): State<AppState>,
    Json(payload): Json<MetricsPayload>,
) -> Result<Json<SingletonOut<MetricsPayload>>, ApiError> {
    payload.validate()?;

    let doc = state
        .dashboard_metrics()
        .replace(payload)
        .await
        .map_err(|e| e.into_api("metrics"))?;

    Ok(Json(doc.into()))
}
