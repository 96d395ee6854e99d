//! Integration tests for the confidence index API endpoints.
//!
//! These tests verify the full request/response cycle through the HTTP API.

use axum_test::TestServer;
use serde_json::json;

use confidence_index::api::router;

fn create_test_server() -> TestServer {
    TestServer::new(router()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_empty_answers_give_baseline() {
    let server = create_test_server();

    let response = server.post("/confidence-index").json(&json!({})).await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 50);
    assert_eq!(body["categoryScores"]["lifestyle"], 50);
    assert_eq!(body["categoryScores"]["physical"], 50);
    assert_eq!(body["categoryScores"]["sexual"], 50);
    assert_eq!(body["categoryScores"]["mental"], 50);
    assert_eq!(body["level"], "средно");
    assert_eq!(body["testosteroneEstimate"], "среден");
    assert_eq!(body["urgencyLevel"], "средна");
    assert_eq!(body["percentile"], 50);
    assert!(body["topIssues"].as_array().unwrap().is_empty());
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_best_case() {
    let server = create_test_server();

    let response = server
        .post("/confidence-index")
        .json(&json!({
            "age": "25-35",
            "work-stress": "calm",
            "body-fat": "low",
            "diet": "balanced",
            "nicotine": "never",
            "alcohol": "never",
            "sleep": "7-8",
            "sex-frequency": "weekly+"
        }))
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 100);
    assert_eq!(body["level"], "отлично");
    assert_eq!(body["testosteroneEstimate"], "отличен");
    assert_eq!(body["urgencyLevel"], "ниска");
    assert!(body["topIssues"].as_array().unwrap().is_empty());
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_worst_case() {
    let server = create_test_server();

    let response = server
        .post("/confidence-index")
        .json(&json!({
            "age": "56+",
            "work-stress": "exhausting",
            "body-fat": "high",
            "diet": "none",
            "nicotine": "daily",
            "alcohol": "daily",
            "sleep": "poor",
            "sex-frequency": "rare",
            "frustration": "performance"
        }))
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["score"], 0);
    assert_eq!(body["level"], "критично");
    assert_eq!(body["testosteroneEstimate"], "много нисък");
    assert_eq!(body["urgencyLevel"], "висока");
    assert_eq!(body["percentile"], 1);
    assert_eq!(
        body["topIssues"],
        json!([
            "Много ниска сексуална активност",
            "Високи подкожни мазнини",
            "Ежедневно пушене"
        ])
    );
    assert_eq!(
        body["timeline"],
        json!({ "day14": 15, "day30": 27, "day60": 45, "day90": 60 })
    );
}

#[tokio::test]
async fn test_identity_fields_do_not_change_score() {
    let server = create_test_server();

    let anonymous: serde_json::Value = server
        .post("/confidence-index")
        .json(&json!({ "sleep": "5-6" }))
        .await
        .json();

    let named: serde_json::Value = server
        .post("/confidence-index")
        .json(&json!({
            "sleep": "5-6",
            "firstName": "Иван",
            "email": "ivan@example.com"
        }))
        .await
        .json();

    assert_eq!(anonymous, named);
    assert_eq!(named["score"], 45);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/confidence-index")
        .json(&json!({ "age": 42 }))
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_report_endpoint() {
    let server = create_test_server();

    let response = server
        .post("/confidence-index/report")
        .json(&json!({
            "firstName": "Иван",
            "email": "ivan@example.com",
            "sleep": "poor"
        }))
        .await;

    response.assert_status_ok();

    let report = response.text();
    assert!(report.starts_with("Здравейте, Иван!"));
    assert!(report.contains("Лош сън"));
    assert!(!report.contains("ivan@example.com"));
}

#[tokio::test]
async fn test_quiz_fields_endpoint() {
    let server = create_test_server();

    let response = server.get("/quiz/fields").await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let fields = body.as_array().unwrap();
    assert_eq!(fields.len(), 13);
    assert_eq!(fields[0]["field"], "age");
    assert_eq!(fields[2]["field"], "work-stress");
    assert_eq!(
        fields[2]["options"],
        json!(["calm", "moderate", "high", "exhausting"])
    );
}

#[tokio::test]
async fn test_full_workflow() {
    let server = create_test_server();

    // 1. Health check
    server.get("/health").await.assert_status_ok();

    // 2. Fetch the field catalogue and answer the first option of each field
    let fields: serde_json::Value = server.get("/quiz/fields").await.json();
    let mut answers = serde_json::Map::new();
    for field in fields.as_array().unwrap() {
        if let Some(first) = field["options"].as_array().unwrap().first() {
            answers.insert(field["field"].as_str().unwrap().to_string(), first.clone());
        }
    }

    // 3. Score them and check the invariants
    let body: serde_json::Value = server
        .post("/confidence-index")
        .json(&serde_json::Value::Object(answers))
        .await
        .json();

    let score = body["score"].as_u64().unwrap();
    assert!(score <= 100);

    let percentile = body["percentile"].as_u64().unwrap();
    assert!((1..=99).contains(&percentile));

    let timeline: Vec<u64> = ["day14", "day30", "day60", "day90"]
        .iter()
        .map(|key| body["timeline"][key].as_u64().unwrap())
        .collect();
    assert!(timeline.windows(2).all(|w| w[0] <= w[1]));
    assert!(timeline.iter().all(|v| *v <= 100));
}
