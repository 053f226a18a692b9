//! Bearer-credential middleware for admin-gated routes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Require a valid admin credential in the `Authorization` header.
///
/// An absent or non-Bearer header fails as `MissingCredential`; a present but
/// expired or unverifiable token fails through the token authority's own
/// taxonomy. All four surface to clients as 401. Verified claims are injected
/// into request extensions for handlers that want them.
pub async fn require_admin(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::MissingCredential("Missing Authorization header".to_string()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::MissingCredential("Authorization header must be a Bearer token".to_string())
    })?;

    let claims: Claims = auth::verify_token(token)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
