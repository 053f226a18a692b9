#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portfolio_api::app::app;
use portfolio_api::config;
use portfolio_api::db::AppState;

/// Router for tests that never touch the store: login, token verification,
/// payload validation, identifier parsing. The driver connects lazily, so a
/// bogus URL only fails if a handler actually reaches the database.
pub async fn router() -> Router {
    let state = AppState::connect_with("mongodb://127.0.0.1:1", "portfolio_test_nodb")
        .await
        .expect("URI parsing should not fail");
    app(state)
}

/// A router plus state bound to a throwaway database on the MongoDB named by
/// `PORTFOLIO_TEST_MONGO_URL`. Returns `None` (test skipped) when unset.
pub struct TestDb {
    pub state: AppState,
}

impl TestDb {
    pub async fn provision() -> Option<Self> {
        let url = match std::env::var("PORTFOLIO_TEST_MONGO_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("PORTFOLIO_TEST_MONGO_URL not set; skipping");
                return None;
            }
        };

        let db_name = format!(
            "portfolio_test_{}",
            mongodb::bson::oid::ObjectId::new().to_hex()
        );
        let state = AppState::connect_with(&url, &db_name)
            .await
            .expect("test MongoDB URL should parse");

        Some(Self { state })
    }

    pub fn router(&self) -> Router {
        app(self.state.clone())
    }

    pub async fn teardown(self) {
        if let Err(e) = self.state.db.drop().await {
            eprintln!("failed to drop test database: {}", e);
        }
    }
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();

    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
    };

    Ok((status, body))
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

pub fn get_authed(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn delete_authed(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request")
}

/// Log in with the configured admin password and return a bearer token.
pub async fn login_token(app: Router) -> Result<String> {
    let password = config::config().security.admin_password.clone();
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            &serde_json::json!({ "password": password }),
        ),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "login failed: {} {}", status, body);
    Ok(body["token"]
        .as_str()
        .context("login response missing token")?
        .to_string())
}

// ---------------------------------------------------------------------------
// Spawned-binary server for liveness tests

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        let mut cmd = Command::new("target/debug/portfolio-api");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Ready on either answer; degraded just means no database
                if resp.status() == reqwest::StatusCode::OK
                    || resp.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
