//! /api/certifications routes. Unlike skills and approach, the wire shape is
//! the whole document including `updated_at`.

use axum::extract::State;
use axum::Json;

use crate::db::singleton::SingletonOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::CertificationsPayload;
use crate::validation::Validate;

pub async fn get(
    State(state): State<AppState>,
) -> Result<Json<SingletonOut<CertificationsPayload>>, ApiError> {
    let doc = state
        .certifications()
        .fetch()
        .await
        .map_err(|e| e.into_api("certifications"))?;

    Ok(Json(doc.into()))
}

pub async fn put(
    State(state): State<AppState>,
    Json(payload): Json<CertificationsPayload>,
) -> Result<Json<SingletonOut<CertificationsPayload>>, ApiError> {
    payload.validate()?;

    let doc = state
        .certifications()
        .replace(payload)
        .await
        .map_err(|e| e.into_api("certifications"))?;

    Ok(Json(doc.into()))
}
