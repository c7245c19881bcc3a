use std::{sync::Arc, time::Duration};

use carelog::{secrets::ADMIN_PHONE_SECRET, test_helpers::StaticSecretStore};
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn sms_without_phone_is_simulated_and_logged() {
    let server = TestServer::new().await;

    let resp = server
        .post("/notifications/sms")
        .json(&json!({ "message": "Lab results ready" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("simulated"));

    let resp = server.get("/notifications/logs").await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let logs = body["logs"].as_str().unwrap();
    assert!(logs.contains("TO: ADMIN - Lab results ready"));

    server.cleanup();
}

#[tokio::test]
async fn duplicate_sms_within_window_is_suppressed() {
    let server = TestServer::new().await;
    let payload = json!({ "message": "Bed shortage on ward 3" });

    let resp = server.post("/notifications/sms").json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = server.post("/notifications/sms").json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("suppressed"));

    // Only the first request may produce an audit entry.
    let resp = server.get("/notifications/logs").await;
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let logs = body["logs"].as_str().unwrap();
    assert_eq!(logs.matches("Bed shortage on ward 3").count(), 1);

    server.cleanup();
}

#[tokio::test]
async fn test_mode_bypasses_suppression() {
    let server = TestServer::new().await;
    let payload = json!({ "message": "Connectivity check", "test_mode": true });

    for _ in 0..2 {
        let resp = server.post("/notifications/sms").json(&payload).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
        assert!(body["message"].as_str().unwrap().contains("simulated"));
    }

    let resp = server.get("/notifications/logs").await;
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let logs = body["logs"].as_str().unwrap();
    assert_eq!(logs.matches("Connectivity check").count(), 2);

    server.cleanup();
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let server = TestServer::new().await;

    let resp = server
        .post("/notifications/sms")
        .json(&json!({ "message": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "message must not be empty");

    server.cleanup();
}

#[tokio::test]
async fn logs_endpoint_returns_placeholder_when_empty() {
    let server = TestServer::new().await;

    let resp = server.get("/notifications/logs").await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["logs"], "No notifications logged yet.");

    server.cleanup();
}

#[tokio::test]
async fn configured_phone_schedules_background_send() {
    let store = create_test_store().await;
    let secrets = Arc::new(StaticSecretStore::with_secret(ADMIN_PHONE_SECRET, "+15550100"));
    let server = TestServer::with_collaborators(store, secrets).await;

    let resp = server
        .post("/notifications/sms")
        .json(&json!({ "message": "Night shift paging test" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("scheduled"));

    // The audit entry appears once the background send completes.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let resp = server.get("/notifications/logs").await;
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let logs = body["logs"].as_str().unwrap();
    assert!(logs.contains("TO: +15550100 - Night shift paging test"));

    server.cleanup();
}
