//! CORS, method, and bearer framing tests.

use super::helpers::{APPLICATION_ID, TestServer, server_time};
use chrono::{DateTime, TimeDelta, Utc};
use eyre::ensure;
use lynkdesk::api::{ALLOWED_HEADERS, ALLOWED_METHODS};
use lynkdesk::task::domain::format_timestamp;
use reqwest::{Method, Response, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

fn ensure_cors(response: &Response) -> eyre::Result<()> {
    let headers = response.headers();
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    ensure!(header("access-control-allow-origin") == Some("*"));
    ensure!(header("access-control-allow-headers") == Some(ALLOWED_HEADERS));
    ensure!(header("access-control-allow-methods") == Some(ALLOWED_METHODS));
    Ok(())
}

#[rstest]
#[case("/create-task")]
#[case("/tasks/today")]
#[case("/tasks/3f2b8c1e-0d4a-4b8e-9a57-2f1c6d9e0b11/complete")]
#[tokio::test(flavor = "multi_thread")]
async fn preflight_is_an_empty_success(
    server_time: DateTime<Utc>,
    #[case] path: &'static str,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .client
        .request(Method::OPTIONS, server.url(path))
        .send()
        .await?;

    ensure!(response.status() == StatusCode::OK);
    ensure_cors(&response)?;
    ensure!(response.bytes().await?.is_empty());
    Ok(())
}

#[rstest]
#[case(Method::GET, "/create-task")]
#[case(Method::PUT, "/create-task")]
#[case(Method::DELETE, "/create-task")]
#[case(Method::POST, "/tasks/today")]
#[case(Method::GET, "/tasks/3f2b8c1e-0d4a-4b8e-9a57-2f1c6d9e0b11/complete")]
#[tokio::test(flavor = "multi_thread")]
async fn other_methods_are_not_allowed(
    server_time: DateTime<Utc>,
    #[case] method: Method,
    #[case] path: &'static str,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server.client.request(method, server.url(path)).send().await?;

    ensure!(response.status() == StatusCode::METHOD_NOT_ALLOWED);
    ensure_cors(&response)?;
    let body: Value = response.json().await?;
    ensure!(body == json!({ "error": "Method not allowed" }));
    Ok(())
}

#[rstest]
#[case("/create-task")]
#[case("/tasks/today")]
#[tokio::test(flavor = "multi_thread")]
async fn head_is_not_allowed(
    server_time: DateTime<Utc>,
    #[case] path: &'static str,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .client
        .request(Method::HEAD, server.url(path))
        .send()
        .await?;

    ensure!(
        response.status() == StatusCode::METHOD_NOT_ALLOWED,
        "HEAD {path} returned {}",
        response.status()
    );
    ensure_cors(&response)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn error_responses_carry_cors_headers(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server.create_task(&json!({})).await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    ensure_cors(&response)?;
    Ok(())
}

#[rstest]
#[case(None)]
#[case(Some("Bearer wrong"))]
#[case(Some("letmein"))]
#[tokio::test(flavor = "multi_thread")]
async fn configured_key_rejects_requests_without_matching_bearer(
    server_time: DateTime<Utc>,
    #[case] authorization: Option<&'static str>,
) -> eyre::Result<()> {
    let server = TestServer::start_with_api_key(server_time, Some("letmein")).await?;

    let mut request = server.client.get(server.url("/tasks/today"));
    if let Some(value) = authorization {
        request = request.header("authorization", value);
    }
    let response = request.send().await?;

    ensure!(response.status() == StatusCode::UNAUTHORIZED);
    ensure_cors(&response)?;
    let body: Value = response.json().await?;
    ensure!(body == json!({ "error": "Unauthorized" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_key_accepts_matching_bearer(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start_with_api_key(server_time, Some("letmein")).await?;

    let response = server
        .client
        .post(server.url("/create-task"))
        .bearer_auth("letmein")
        .json(&json!({
            "application_id": APPLICATION_ID,
            "task_type": "call",
            "due_at": format_timestamp(server_time + TimeDelta::hours(1)),
        }))
        .send()
        .await?;

    ensure!(response.status() == StatusCode::OK);
    ensure!(server.stored_tasks()?.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_key_still_allows_preflight(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start_with_api_key(server_time, Some("letmein")).await?;

    let response = server
        .client
        .request(Method::OPTIONS, server.url("/create-task"))
        .send()
        .await?;

    ensure!(response.status() == StatusCode::OK);
    ensure_cors(&response)?;
    Ok(())
}
