//! /api/testimonials routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::db::records::RecordOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::TestimonialFields;
use crate::validation::Validate;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordOut<TestimonialFields>>>, ApiError> {
    let testimonials = state
        .testimonials()
        .list()
        .await
        .map_err(|e| e.into_api("testimonial"))?;

    Ok(Json(testimonials.into_iter().map(RecordOut::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<TestimonialFields>,
) -> Result<Json<RecordOut<TestimonialFields>>, ApiError> {
    fields.validate()?;

    let testimonial = state
        .testimonials()
        .create(fields)
        .await
        .map_err(|e| e.into_api("testimonial"))?;

    Ok(Json(testimonial.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<TestimonialFields>,
) -> Result<Json<RecordOut<TestimonialFields>>, ApiError> {
    fields.validate()?;

    let testimonial = state
        .testimonials()
        .replace(&id, fields)
        .await
        .map_err(|e| e.into_api("testimonial"))?;

    Ok(Json(testimonial.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .testimonials()
        .delete(&id)
        .await
        .map_err(|e| e.into_api("testimonial"))?;

    Ok(Json(json!({ "message": "Testimonial deleted successfully" })))
}
