use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use convoy_core::models::DashboardEvent;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_and_root_respond() {
    let (app, _state) = setup_app();

    let res = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get("/")).await.unwrap();
    let body = read_json(res).await;
    assert_eq!(body["message"], "Convoy backend is running");
}

#[tokio::test]
async fn scenario_initialize_seeds_zones_and_clears_incidents() {
    let (app, state) = setup_app();
    state.add_incident(convoy_core::NewIncident {
        lat: 1.0,
        lng: 1.0,
        severity: convoy_core::Severity::High,
        intensity: 8,
    });

    let res = app
        .clone()
        .oneshot(post_json(
            "/api/scenario/initialize",
            json!({ "lat": 28.6, "lng": 77.2 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.clone().oneshot(get("/api/threat_zones")).await.unwrap();
    let zones = read_json(res).await;
    let zones = zones.as_array().expect("zone list");
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0]["radius"], 800.0);
    assert_eq!(zones[1]["threat_score"], 10);

    let res = app.oneshot(get("/api/incidents")).await.unwrap();
    assert_eq!(read_json(res).await, json!([]));
}

#[tokio::test]
async fn create_convoy_plans_detour_around_zone() {
    let (app, state) = setup_app();
    state.reset_scenario(vec![convoy_core::NewThreatZone {
        lat: 0.0,
        lng: 0.5,
        radius: 5_000.0,
        threat_score: 7,
    }]);
    let mut rx = state.subscribe();

    let res = app
        .clone()
        .oneshot(post_json(
            "/api/convoys",
            json!({
                "name": "Relief-1",
                "start": { "lat": 0.0, "lng": 0.0 },
                "end": { "lat": 0.0, "lng": 1.0 }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["name"], "Relief-1");
    let route = body["route"].as_array().expect("route");
    assert_eq!(route.len(), 3);
    assert_eq!(route[0], json!([0.0, 0.0]));
    assert_eq!(route[2], json!([0.0, 1.0]));
    let detour_lat = route[1][0].as_f64().unwrap();
    assert!((detour_lat + 2.0 * 5_000.0 / 111_320.0).abs() < 1e-9);

    assert!(matches!(rx.try_recv(), Ok(DashboardEvent::ConvoyUpdate(_))));

    let convoy_id = body["convoy_id"].as_u64().unwrap();
    let res = app
        .oneshot(get(&format!("/api/convoys/{}", convoy_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let convoy = read_json(res).await;
    assert_eq!(convoy["status"], "In-Progress");
    assert_eq!(convoy["waypoints"][1]["sequence"], 1);
}

#[tokio::test]
async fn unknown_convoy_is_not_found() {
    let (app, _state) = setup_app();
    let res = app.oneshot(get("/api/convoys/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["detail"], "Convoy 42 not found");
}

#[tokio::test]
async fn sos_report_is_stored_and_broadcast() {
    let (app, state) = setup_app();
    let mut rx = state.subscribe();

    let res = app
        .clone()
        .oneshot(post_json(
            "/api/incidents",
            json!({ "lat": 12.5, "lng": 77.1, "severity": "Critical", "intensity": 9 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    match rx.try_recv() {
        Ok(DashboardEvent::NewIncident(notice)) => {
            assert_eq!(notice.severity, convoy_core::Severity::Critical)
        }
        other => panic!("expected incident notice, got {other:?}"),
    }

    let res = app.oneshot(get("/api/incidents")).await.unwrap();
    let incidents = read_json(res).await;
    assert_eq!(incidents[0]["severity"], "Critical");
}

#[tokio::test]
async fn positive_detection_raises_high_incident() {
    let (app, state) = setup_app();

    let res = app
        .oneshot(post_json(
            "/api/detect",
            json!({
                "lat": 10.0,
                "lng": 20.0,
                "threat_detected": true,
                "detection_summary": { "person": 2, "truck": 1 }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["threat_detected"], true);
    assert_eq!(body["detection_summary"]["person"], 2);

    let incidents = state.incidents();
    assert_eq!(incidents.len(), 1);
    assert!((incidents[0].lat - 10.005).abs() < 1e-9);
    assert!((incidents[0].lng - 19.995).abs() < 1e-9);
}

#[tokio::test]
async fn negative_detection_leaves_incidents_alone() {
    let (app, state) = setup_app();

    let res = app
        .oneshot(post_json(
            "/api/detect",
            json!({ "lat": 10.0, "lng": 20.0, "threat_detected": false }),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["threat_detected"], false);
    assert!(body.get("incident_id").is_none());
    assert!(state.incidents().is_empty());
}

#[tokio::test]
async fn messages_round_through_history() {
    let (app, _state) = setup_app();

    let res = app
        .clone()
        .oneshot(post_json(
            "/api/messages",
            json!({ "sid": "unit-7", "text": "Checkpoint clear" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.oneshot(get("/api/messages")).await.unwrap();
    let history = read_json(res).await;
    assert_eq!(history[0]["sid"], "unit-7");
    assert_eq!(history[0]["text"], "Checkpoint clear");
}
