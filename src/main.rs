use portfolio_api::app::app;
use portfolio_api::config::{self, Environment};
use portfolio_api::db::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGO_URL, ADMIN_PASSWORD, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=info,tower_http=info".into()),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Portfolio API in {:?} mode", config.environment);

    // Secrets must come from the environment in production; refuse to serve
    // with the development placeholders absent.
    if config.environment == Environment::Production
        && (config.security.jwt_secret.is_empty() || config.security.admin_password.is_empty())
    {
        anyhow::bail!("JWT_SECRET_KEY and ADMIN_PASSWORD must be set in production");
    }

    let state = AppState::connect(config).await?;
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Portfolio API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
