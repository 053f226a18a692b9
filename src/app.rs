//! Router construction: route groups, bearer gating, global layers.

use axum::middleware::from_fn;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::AppState;
use crate::handlers;
use crate::middleware::require_admin;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public content reads, login, and the contact form
        .merge(public_routes())
        // Everything else requires a bearer credential
        .merge(admin_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/personal-info", get(handlers::personal_info::get))
        .route("/api/projects", get(handlers::projects::list))
        .route("/api/work-experience", get(handlers::work_experience::list))
        .route("/api/testimonials", get(handlers::testimonials::list))
        .route("/api/skills", get(handlers::skills::get))
        .route("/api/approach", get(handlers::approach::get))
        .route("/api/certifications", get(handlers::certifications::get))
        .route("/api/metrics", get(handlers::metrics::get))
        // The one unauthenticated write: the public contact form
        .route("/api/contact", post(handlers::contact::submit))
}

fn admin_routes() -> Router<AppState> {
    use axum::routing::delete;

    Router::new()
        .route("/api/auth/verify", get(handlers::auth::verify))
        // Singleton replacements
        .route("/api/personal-info", put(handlers::personal_info::put))
        .route("/api/skills", put(handlers::skills::put))
        .route("/api/approach", put(handlers::approach::put))
        .route("/api/certifications", put(handlers::certifications::put))
        .route("/api/metrics", put(handlers::metrics::put))
        // Record mutations
        .route("/api/projects", post(handlers::projects::create))
        .route(
            "/api/projects/:id",
            put(handlers::projects::update).delete(handlers::projects::remove),
        )
        .route("/api/work-experience", post(handlers::work_experience::create))
        .route(
            "/api/work-experience/:id",
            put(handlers::work_experience::update).delete(handlers::work_experience::remove),
        )
        .route("/api/testimonials", post(handlers::testimonials::create))
        .route(
            "/api/testimonials/:id",
            put(handlers::testimonials::update).delete(handlers::testimonials::remove),
        )
        // Contact inbox
        .route("/api/contact", get(handlers::contact::list))
        .route("/api/contact/:id/read", put(handlers::contact::mark_read))
        .route("/api/contact/:id", delete(handlers::contact::remove))
        .route_layer(from_fn(require_admin))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Portfolio API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "login": "/api/auth/login (public - token acquisition)",
            "content": "/api/personal-info, /api/projects, /api/work-experience, /api/testimonials, /api/skills, /api/approach, /api/certifications, /api/metrics (GET public, writes require bearer token)",
            "contact": "/api/contact (POST public, inbox requires bearer token)",
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
