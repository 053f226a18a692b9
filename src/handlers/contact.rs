//! /api/contact routes.
//!
//! Submission is the one unauthenticated write in the whole API: it is the
//! public contact form. Reading the inbox, flagging messages read, and
//! deleting them are admin-gated.

use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::doc;
use serde_json::{json, Value};

use crate::db::records::RecordOut;
use crate::db::AppState;
use crate::error::ApiError;
use crate::models::{ContactMessageCreate, ContactMessageFields};
use crate::validation::Validate;

pub async fn submit(
    State(state): State<AppState>,
    Json(message): Json<ContactMessageCreate>,
) -> Result<Json<Value>, ApiError> {
    message.validate()?;

    state
        .contact_messages()
        .create(message.into_fields())
        .await
        .map_err(|e| e.into_api("contact message"))?;

    Ok(Json(json!({ "message": "Your message has been sent successfully!" })))
}

/// Inbox view, newest submission first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordOut<ContactMessageFields>>>, ApiError> {
    let messages = state
        .contact_messages()
        .list_newest_first()
        .await
        .map_err(|e| e.into_api("contact message"))?;

    Ok(Json(messages.into_iter().map(RecordOut::from).collect()))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .contact_messages()
        .set_fields(&id, doc! { "read": true })
        .await
        .map_err(|e| e.into_api("message"))?;

    Ok(Json(json!({ "message": "Message marked as read" })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .contact_messages()
        .delete(&id)
        .await
        .map_err(|e| e.into_api("message"))?;

    Ok(Json(json!({ "message": "Contact message deleted successfully" })))
}
