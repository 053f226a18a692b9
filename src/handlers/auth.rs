//! POST /api/auth/login and GET /api/auth/verify.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange the admin password for a bearer token.
pub async fn login(Json(credentials): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    if !auth::check_password(&credentials.password) {
        tracing::warn!("login rejected: wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = auth::issue_token(&Claims::admin())?;
    tracing::info!("admin login succeeded");

    Ok(Json(LoginResponse { token }))
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Reached only through the bearer middleware, so arriving here means the
/// presented token checked out.
pub async fn verify() -> Json<VerifyResponse> {
    Json(VerifyResponse { valid: true })
}
