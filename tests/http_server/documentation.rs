use serde_json::json;

use crate::helpers::*;

fn documentation_payload(patient_id: &str, encounter_id: &str) -> serde_json::Value {
    json!({
        "patient_id": patient_id,
        "encounter_id": encounter_id,
        "template_id": "ros-template-1",
        "template_type": "reviewOfSystems",
        "content": { "constitutional": { "fever": false } },
        "created_by": "dr-demo"
    })
}

async fn create_documentation(server: &TestServer, payload: &serde_json::Value) -> String {
    let resp = server.post("/api/documentation").json(payload).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Documentation created successfully");
    body["documentation"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_documentation_assigns_id_and_timestamps() {
    let server = TestServer::new().await;

    let resp = server
        .post("/api/documentation")
        .json(&documentation_payload("p1", "e1"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let documentation = &body["documentation"];
    assert!(documentation["id"].as_str().unwrap().starts_with("doc-"));
    assert!(documentation["created_at"].is_string());
    assert_eq!(documentation["patient_id"], "p1");

    server.cleanup();
}

#[tokio::test]
async fn documentation_by_id_round_trips() {
    let server = TestServer::new().await;
    let id = create_documentation(&server, &documentation_payload("p1", "e1")).await;

    let resp = server.get(&format!("/api/documentation/{id}")).await;

    assert_eq!(resp.status(), 200);
    let fetched: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(fetched["id"], json!(id));
    assert_eq!(fetched["encounter_id"], "e1");
    assert_eq!(fetched["content"]["constitutional"]["fever"], json!(false));

    server.cleanup();
}

#[tokio::test]
async fn documentation_by_id_returns_404_for_nonexistent_id() {
    let server = TestServer::new().await;

    let resp = server.get("/api/documentation/doc-missing").await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "Documentation with ID doc-missing not found");

    server.cleanup();
}

#[tokio::test]
async fn patient_documentations_are_filtered_by_patient() {
    let server = TestServer::new().await;
    create_documentation(&server, &documentation_payload("p1", "e1")).await;
    create_documentation(&server, &documentation_payload("p2", "e1")).await;
    create_documentation(&server, &documentation_payload("p1", "e2")).await;

    let resp = server.get("/api/documentation/patient/p1").await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let docs = body["documentations"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d["patient_id"] == "p1"));

    server.cleanup();
}

#[tokio::test]
async fn encounter_documentations_are_filtered_by_encounter() {
    let server = TestServer::new().await;
    create_documentation(&server, &documentation_payload("p1", "e1")).await;
    create_documentation(&server, &documentation_payload("p2", "e2")).await;

    let resp = server.get("/api/documentation/encounter/e2").await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    let docs = body["documentations"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["patient_id"], "p2");

    server.cleanup();
}

#[tokio::test]
async fn update_documentation_replaces_content_and_records_author() {
    let server = TestServer::new().await;
    let id = create_documentation(&server, &documentation_payload("p1", "e1")).await;

    let resp = server
        .put(&format!("/api/documentation/{id}?updated_by=dr-oncall"))
        .json(&json!({ "revised": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Documentation updated successfully");

    let resp = server.get(&format!("/api/documentation/{id}")).await;
    let fetched: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(fetched["content"], json!({ "revised": true }));
    assert_eq!(fetched["updated_by"], "dr-oncall");

    server.cleanup();
}

#[tokio::test]
async fn update_nonexistent_documentation_returns_404() {
    let server = TestServer::new().await;

    let resp = server
        .put("/api/documentation/doc-missing?updated_by=dr-oncall")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    server.cleanup();
}
