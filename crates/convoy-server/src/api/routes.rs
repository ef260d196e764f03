//! REST API routes.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::{convoys, detect, messages, threats};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    let threat_routes = Router::new()
        .route("/api/scenario/initialize", post(threats::initialize_scenario))
        .route("/api/threat_zones", get(threats::list_threat_zones))
        .route(
            "/api/incidents",
            get(threats::list_incidents).post(threats::report_incident),
        )
        .route("/api/detect", post(detect::receive_detection));

    let convoy_routes = Router::new()
        .route(
            "/api/convoys",
            get(convoys::list_convoys).post(convoys::create_convoy),
        )
        .route("/api/convoys/:id", get(convoys::get_convoy));

    let message_routes = Router::new().route(
        "/api/messages",
        get(messages::list_messages).post(messages::post_message),
    );

    Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "OK" }))
        .merge(threat_routes)
        .merge(convoy_routes)
        .merge(message_routes)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Convoy backend is running" }))
}
