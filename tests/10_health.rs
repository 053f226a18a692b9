mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // OK with a database, SERVICE_UNAVAILABLE without one; both mean the
    // server itself is up
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["status"].is_string());
    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["name"], "Portfolio API");
    assert!(body["endpoints"]["login"].is_string());
    Ok(())
}
