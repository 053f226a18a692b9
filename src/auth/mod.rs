use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

/// Role marker carried by every issued credential. The API has exactly one
/// privileged actor, so this is the only role that exists.
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Admin claims expiring the configured number of hours from now.
    pub fn admin() -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;

        Self {
            role: ROLE_ADMIN.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token generation failed: {0}")]
    Generation(String),
    #[error("JWT secret is not configured")]
    MissingSecret,
}

/// Sign `claims` with the server secret and return the encoded token.
///
/// Stateless: issued tokens are never persisted and cannot be revoked early.
pub fn issue_token(claims: &Claims) -> Result<String, TokenError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| TokenError::Generation(e.to_string()))
}

/// Decode `token`, checking signature and expiration against the server secret.
///
/// Expiry and signature failures stay distinguishable for diagnosability even
/// though both surface to clients as the same unauthorized response.
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
}

/// Check a login attempt against the configured admin password.
///
/// Plain equality against a single shared secret: this is a single-operator
/// tool with no user table. Hashing, lockout, and rotation are expected
/// hardening steps before any multi-user deployment.
pub fn check_password(candidate: &str) -> bool {
    candidate == config::config().security.admin_password
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token(&Claims::admin()).unwrap();
        let claims = verify_token(&token).unwrap();

        assert_eq!(claims.role, ROLE_ADMIN);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expiry_is_a_day_out_by_default() {
        let claims = Claims::admin();
        let lifetime = claims.exp - claims.iat;

        assert_eq!(lifetime, 24 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = Claims {
            role: ROLE_ADMIN.to_string(),
            iat: (now - Duration::hours(25)).timestamp(),
            // Well past the default validation leeway
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = issue_token(&claims).unwrap();

        assert!(matches!(verify_token(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not-a-token"),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(verify_token(""), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut token = issue_token(&Claims::admin()).unwrap();
        token.push('x');

        assert!(matches!(verify_token(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn password_check_matches_configured_password() {
        let password = config::config().security.admin_password.clone();

        assert!(check_password(&password));
        assert!(!check_password("definitely-not-the-password"));
    }
}
