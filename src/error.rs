// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::TokenError;
use crate::db::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    InvalidCredentials,
    MissingCredential(String),
    ExpiredCredential,
    InvalidCredential,

    // 400 Bad Request
    Validation {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    // 404 Not Found
    InvalidIdentifier(String),
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidCredentials => 401,
            ApiError::MissingCredential(_) => 401,
            ApiError::ExpiredCredential => 401,
            ApiError::InvalidCredential => 401,
            ApiError::Validation { .. } => 400,
            ApiError::InvalidIdentifier(_) => 404,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidCredentials => "Invalid password".to_string(),
            ApiError::MissingCredential(msg) => msg.clone(),
            ApiError::ExpiredCredential => "Token has expired".to_string(),
            ApiError::InvalidCredential => "Invalid token".to_string(),
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::InvalidIdentifier(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::InternalServerError(msg) => msg.clone(),
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::MissingCredential(_) => "MISSING_CREDENTIAL",
            ApiError::ExpiredCredential => "EXPIRED_CREDENTIAL",
            ApiError::InvalidCredential => "INVALID_CREDENTIAL",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation {
                message,
                field_errors,
            } => {
                let mut response = json!({
                    "error": true,
                    "message": message,
                    "code": "VALIDATION_ERROR"
                });

                if let Some(field_errors) = field_errors {
                    response["field_errors"] = json!(field_errors);
                }

                response
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::Validation {
            message: message.into(),
            field_errors,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

// Convert other error types to ApiError
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::ExpiredCredential,
            TokenError::Invalid(reason) => {
                tracing::debug!("token rejected: {}", reason);
                ApiError::InvalidCredential
            }
            TokenError::Generation(msg) => {
                tracing::error!("token generation failed: {}", msg);
                ApiError::internal_server_error("Failed to issue credential")
            }
            TokenError::MissingSecret => {
                tracing::error!("JWT secret is not configured");
                ApiError::internal_server_error("Authentication is not configured")
            }
        }
    }
}

impl StoreError {
    /// Map a store failure onto the API taxonomy, naming the resource in
    /// client-facing messages. Driver errors are logged and never leaked.
    pub fn into_api(self, resource: &str) -> ApiError {
        match self {
            StoreError::InvalidId(value) => {
                tracing::debug!("malformed {} identifier: {}", resource, value);
                ApiError::InvalidIdentifier(format!("Invalid {} ID", resource))
            }
            StoreError::NotFound => ApiError::not_found(format!("{} not found", resource)),
            StoreError::Mongo(err) => {
                tracing::error!("database error on {}: {}", resource, err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            StoreError::Bson(err) => {
                tracing::error!("BSON encoding error on {}: {}", resource, err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
