//! API integration tests
//!
//! Require a running server backed by a seeded database and the same
//! JWT secret as the server (`JWT_SECRET`, default from config/default.toml).

use chrono::{Duration, Utc};
use fieldbook_server::models::user::UserClaims;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-this-secret-in-production".to_string())
}

/// Token for a user of `company_id` (or of no company)
fn token_for(company_id: Option<Uuid>) -> String {
    let now = Utc::now();
    UserClaims {
        sub: "dispatcher@example.com".to_string(),
        user_id: Uuid::new_v4(),
        company_id,
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    }
    .create_token(&jwt_secret())
    .expect("Failed to sign token")
}

fn seeded_company() -> Option<Uuid> {
    std::env::var("FIELDBOOK_TEST_COMPANY")
        .ok()
        .and_then(|s| s.parse().ok())
        .or_else(|| Some(Uuid::new_v4()))
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_resources_require_authentication() {
    let client = Client::new();

    let response = client
        .get(format!("{}/appointments/resources", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_resources_require_company() {
    let client = Client::new();

    let response = client
        .get(format!("{}/appointments/resources", BASE_URL))
        .header("Authorization", format!("Bearer {}", token_for(None)))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_resources_for_week() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/appointments/resources?start=2024-03-11&end=2024-03-17",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token_for(seeded_company())))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["resources"].is_array());
    let events = body["events"].as_array().expect("events is not an array");
    for event in events {
        assert!(event["id"].is_string());
        assert!(event["resourceId"].is_string());
        assert!(event["type"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_resources_reject_inverted_range() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/appointments/resources?start=2024-03-17&end=2024-03-11",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token_for(seeded_company())))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
