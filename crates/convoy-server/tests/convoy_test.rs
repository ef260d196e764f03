//! Convoy planning integration tests.
//!
//! Run with: cargo test --test convoy_test -- --ignored
//! Requires a running convoy server.

use reqwest::Client;

fn base_url() -> String {
    std::env::var("CONVOY_TEST_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Seed a scenario, then plan a convoy straight through the first seeded zone.
#[tokio::test]
#[ignore]
async fn test_convoy_detours_around_seeded_zone() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/scenario/initialize", base))
        .json(&serde_json::json!({ "lat": 28.6, "lng": 77.2 }))
        .send()
        .await
        .expect("Failed to initialize scenario");
    assert!(resp.status().is_success(), "Should initialize scenario");

    // First seeded zone sits at (28.62, 77.21) with an 800 m radius.
    let convoy_body = serde_json::json!({
        "name": "Integration Convoy",
        "start": { "lat": 28.62, "lng": 77.15 },
        "end": { "lat": 28.62, "lng": 77.27 }
    });

    let resp = client
        .post(format!("{}/api/convoys", base))
        .json(&convoy_body)
        .send()
        .await
        .expect("Failed to create convoy");
    assert!(resp.status().is_success(), "Should create convoy");

    let created: serde_json::Value = resp.json().await.unwrap();
    let route = created["route"].as_array().expect("route array");
    assert_eq!(route.len(), 3, "Route through a zone should detour");

    let convoy_id = created["convoy_id"].as_u64().unwrap();
    let resp = client
        .get(format!("{}/api/convoys/{}", base, convoy_id))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success(), "Should get convoy by ID");
}

/// A route far from every zone stays direct.
#[tokio::test]
#[ignore]
async fn test_convoy_far_from_threats_is_direct() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/convoys", base))
        .json(&serde_json::json!({
            "name": "Remote Convoy",
            "start": { "lat": -40.0, "lng": -70.0 },
            "end": { "lat": -40.1, "lng": -70.1 }
        }))
        .send()
        .await
        .expect("Failed to create convoy");

    let created: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(created["route"].as_array().map(Vec::len), Some(2));
}
