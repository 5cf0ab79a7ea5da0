//! `POST /create-task` integration tests.

use super::helpers::{APPLICATION_ID, TENANT_ID, TestServer, server_time};
use chrono::{DateTime, TimeDelta, Utc};
use eyre::ensure;
use lynkdesk::task::domain::{TaskKind, TaskStatus, format_timestamp};
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

fn due_in(now: DateTime<Utc>, offset: TimeDelta) -> String {
    format_timestamp(now + offset)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn valid_request_creates_open_task_for_application_tenant(
    server_time: DateTime<Utc>,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;
    let due_at = due_in(server_time, TimeDelta::hours(1));

    let response = server
        .create_task(&json!({
            "application_id": APPLICATION_ID,
            "task_type": "email",
            "due_at": due_at,
        }))
        .await?;

    ensure!(response.status() == StatusCode::OK, "status {}", response.status());
    let body: Value = response.json().await?;
    ensure!(body["success"] == json!(true));
    ensure!(body["task_id"] == body["task"]["id"]);
    ensure!(body["task"]["application_id"] == json!(APPLICATION_ID));
    ensure!(body["task"]["tenant_id"] == json!(TENANT_ID));
    ensure!(body["task"]["type"] == json!("email"));
    ensure!(body["task"]["status"] == json!("open"));
    ensure!(body["task"]["due_at"] == json!(due_at));

    let stored = server.stored_tasks()?;
    ensure!(stored.len() == 1, "expected one stored task, found {}", stored.len());
    let task = stored.first().ok_or_else(|| eyre::eyre!("missing stored task"))?;
    ensure!(body["task_id"] == json!(task.id().to_string()));
    ensure!(task.application_id().as_str() == APPLICATION_ID);
    ensure!(task.tenant_id().as_str() == TENANT_ID);
    ensure!(task.kind() == TaskKind::Email);
    ensure!(task.status() == TaskStatus::Open);
    ensure!(task.due_at().as_datetime() == server_time + TimeDelta::hours(1));
    Ok(())
}

#[rstest]
#[case(json!({ "task_type": "call", "due_at": "2030-01-01T00:00:00Z" }), json!(["application_id"]))]
#[case(json!({ "application_id": "A1", "task_type": "", "due_at": "2030-01-01T00:00:00Z" }), json!(["task_type"]))]
#[case(json!({ "application_id": "A1", "task_type": "call", "due_at": null }), json!(["due_at"]))]
#[case(json!({}), json!(["application_id", "task_type", "due_at"]))]
#[tokio::test(flavor = "multi_thread")]
async fn missing_fields_are_rejected(
    server_time: DateTime<Utc>,
    #[case] payload: Value,
    #[case] expected_missing: Value,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server.create_task(&payload).await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("Missing required fields"));
    ensure!(body["required"] == json!(["application_id", "task_type", "due_at"]));
    ensure!(body["missing"] == expected_missing, "missing was {}", body["missing"]);
    ensure!(server.stored_tasks()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsupported_task_type_is_rejected(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .create_task(&json!({
            "application_id": APPLICATION_ID,
            "task_type": "meeting",
            "due_at": due_in(server_time, TimeDelta::hours(1)),
        }))
        .await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("Invalid task_type. Must be one of: call, email, review"));
    ensure!(body["allowed"] == json!(["call", "email", "review"]));
    ensure!(body["provided"] == json!("meeting"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unparseable_due_at_is_rejected_with_hint(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .create_task(&json!({
            "application_id": APPLICATION_ID,
            "task_type": "call",
            "due_at": "next tuesday",
        }))
        .await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("Invalid date format for due_at"));
    ensure!(body["hint"] == json!("Use ISO 8601 format like 2025-01-01T12:00:00Z"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_at_one_second_in_the_past_is_rejected(
    server_time: DateTime<Utc>,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;
    let due_at = due_in(server_time, TimeDelta::seconds(-1));

    let response = server
        .create_task(&json!({
            "application_id": APPLICATION_ID,
            "task_type": "call",
            "due_at": due_at,
        }))
        .await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("due_at must be a future timestamp"));
    ensure!(body["provided"] == json!(due_at));
    ensure!(body["server_time"] == json!("2026-03-14T15:00:00.000Z"));
    ensure!(server.stored_tasks()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_application_is_not_found(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .create_task(&json!({
            "application_id": "no-such-application",
            "task_type": "review",
            "due_at": due_in(server_time, TimeDelta::hours(1)),
        }))
        .await?;

    ensure!(response.status() == StatusCode::NOT_FOUND);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("Application not found"));
    ensure!(body["application_id"] == json!("no-such-application"));
    ensure!(server.stored_tasks()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_requests_are_not_deduplicated(server_time: DateTime<Utc>) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;
    let payload = json!({
        "application_id": APPLICATION_ID,
        "task_type": "call",
        "due_at": due_in(server_time, TimeDelta::minutes(30)),
    });

    let first: Value = server.create_task(&payload).await?.json().await?;
    let second: Value = server.create_task(&payload).await?.json().await?;

    ensure!(first["task_id"] != second["task_id"]);
    ensure!(server.stored_tasks()?.len() == 2);
    Ok(())
}

#[rstest]
#[case("not json")]
#[case("42")]
#[case(r#"{"application_id": 7, "task_type": "call", "due_at": "2030-01-01T00:00:00Z"}"#)]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_a_client_error(
    server_time: DateTime<Utc>,
    #[case] raw_body: &'static str,
) -> eyre::Result<()> {
    let server = TestServer::start(server_time).await?;

    let response = server
        .client
        .post(server.url("/create-task"))
        .header("content-type", "application/json")
        .body(raw_body)
        .send()
        .await?;

    ensure!(response.status() == StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    ensure!(body["error"] == json!("Invalid JSON body"));
    ensure!(body["details"].is_string());
    Ok(())
}
