//! Login, bearer gating, and payload validation, exercised in-process.
//! Nothing here reaches the database: every request is rejected (or answered)
//! before a store call.

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use portfolio_api::auth::{self, Claims, ROLE_ADMIN};

#[tokio::test]
async fn login_rejects_wrong_password() -> Result<()> {
    let app = common::router().await;

    let (status, body) = common::send(
        app,
        common::json_request("POST", "/api/auth/login", None, &json!({ "password": "nope" })),
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    Ok(())
}

#[tokio::test]
async fn login_then_verify_round_trips() -> Result<()> {
    let app = common::router().await;
    let token = common::login_token(app.clone()).await?;

    let (status, body) =
        common::send(app, common::get_authed("/api/auth/verify", &token)).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    Ok(())
}

#[tokio::test]
async fn admin_routes_require_a_bearer_header() -> Result<()> {
    let app = common::router().await;

    // No header at all
    let (status, body) = common::send(app.clone(), common::get("/api/auth/verify")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "MISSING_CREDENTIAL");

    // Present but not a Bearer credential
    let request = axum::http::Request::builder()
        .uri("/api/auth/verify")
        .header("authorization", "Basic YWRtaW46YWRtaW4=")
        .body(axum::body::Body::empty())?;
    let (status, body) = common::send(app.clone(), request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "MISSING_CREDENTIAL");

    // Mutations are gated the same way as the verify endpoint
    let (status, _) = common::send(
        app,
        common::json_request("POST", "/api/projects", None, &json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn garbage_tokens_are_invalid_credentials() -> Result<()> {
    let app = common::router().await;

    let (status, body) = common::send(
        app,
        common::get_authed("/api/auth/verify", "not-a-real-token"),
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIAL");
    Ok(())
}

#[tokio::test]
async fn expired_tokens_are_reported_as_expired() -> Result<()> {
    let app = common::router().await;

    let now = Utc::now();
    let claims = Claims {
        role: ROLE_ADMIN.to_string(),
        iat: (now - Duration::hours(25)).timestamp(),
        exp: (now - Duration::hours(1)).timestamp(),
    };
    let token = auth::issue_token(&claims)?;

    let (status, body) = common::send(app, common::get_authed("/api/auth/verify", &token)).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "EXPIRED_CREDENTIAL");
    Ok(())
}

#[tokio::test]
async fn project_payloads_are_validated_before_storage() -> Result<()> {
    let app = common::router().await;
    let token = common::login_token(app.clone()).await?;

    let (status, body) = common::send(
        app,
        common::json_request(
            "POST",
            "/api/projects",
            Some(&token),
            &json!({
                "title": "",
                "description": "d",
                "technologies": ["Py"],
                "github": "http://g"
            }),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["title"], "must not be empty");
    Ok(())
}

#[tokio::test]
async fn testimonial_rating_is_range_checked() -> Result<()> {
    let app = common::router().await;
    let token = common::login_token(app.clone()).await?;

    let (status, body) = common::send(
        app,
        common::json_request(
            "POST",
            "/api/testimonials",
            Some(&token),
            &json!({
                "name": "A",
                "position": "Engineer",
                "company": "Acme",
                "content": "Great",
                "rating": 9
            }),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["rating"], "must be between 1 and 5");
    Ok(())
}

#[tokio::test]
async fn contact_form_is_public_but_validated() -> Result<()> {
    let app = common::router().await;

    let (status, body) = common::send(
        app,
        common::json_request(
            "POST",
            "/api/contact",
            None,
            &json!({ "name": "A", "email": "not-an-email", "message": "hi" }),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["email"], "must be a valid email address");
    Ok(())
}

#[tokio::test]
async fn malformed_identifiers_short_circuit_before_the_store() -> Result<()> {
    let app = common::router().await;
    let token = common::login_token(app.clone()).await?;

    // The backing database here is unreachable, so a 404 proves the id was
    // rejected without a store round trip
    let (status, body) =
        common::send(app, common::delete_authed("/api/projects/not-an-id", &token)).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "INVALID_IDENTIFIER");
    Ok(())
}

#[tokio::test]
async fn skill_levels_are_range_checked() -> Result<()> {
    let app = common::router().await;
    let token = common::login_token(app.clone()).await?;

    let (status, body) = common::send(
        app,
        common::json_request(
            "PUT",
            "/api/skills",
            Some(&token),
            &json!([{ "name": "Rust", "level": 250 }]),
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["skills[0].level"], "must be between 0 and 100");
    Ok(())
}
