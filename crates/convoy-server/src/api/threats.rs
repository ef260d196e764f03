//! Threat zone, incident and scenario endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use convoy_core::models::{Incident, NewIncident, ThreatZone};
use convoy_core::{seed_threat_zones, Coordinate};

use crate::incident_intake::record_incident;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub message: String,
    pub threat_zones: Vec<ThreatZone>,
}

/// Wipe zones and incidents, then seed demo zones around `location`.
pub async fn initialize_scenario(
    State(state): State<Arc<AppState>>,
    Json(location): Json<Coordinate>,
) -> Json<ScenarioResponse> {
    tracing::info!(
        "Initializing new scenario around {:.4}, {:.4}",
        location.lat,
        location.lng
    );
    let threat_zones = state.reset_scenario(seed_threat_zones(location));
    Json(ScenarioResponse {
        message: "Scenario initialized successfully".to_string(),
        threat_zones,
    })
}

pub async fn list_threat_zones(State(state): State<Arc<AppState>>) -> Json<Vec<ThreatZone>> {
    Json(state.threat_zones())
}

/// List incidents, newest first.
pub async fn list_incidents(State(state): State<Arc<AppState>>) -> Json<Vec<Incident>> {
    Json(state.incidents())
}

/// SOS report from a field unit.
pub async fn report_incident(
    State(state): State<Arc<AppState>>,
    Json(report): Json<NewIncident>,
) -> (StatusCode, Json<Incident>) {
    let incident = record_incident(&state, report);
    (StatusCode::CREATED, Json(incident))
}
