//! Detection pipeline intake.

use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use convoy_core::DetectionReport;

use crate::incident_intake::record_detection;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub message: String,
    pub detection_summary: BTreeMap<String, u32>,
    pub threat_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<u64>,
}

/// Accept an analysed stream's verdict; a positive one raises an incident.
pub async fn receive_detection(
    State(state): State<Arc<AppState>>,
    Json(report): Json<DetectionReport>,
) -> Json<DetectionResponse> {
    let incident = record_detection(&state, &report);
    let message = if incident.is_some() {
        "Analysis complete. High severity threat detected."
    } else {
        "Analysis complete. No threats were detected."
    };

    Json(DetectionResponse {
        message: message.to_string(),
        threat_detected: incident.is_some(),
        incident_id: incident.map(|incident| incident.id),
        detection_summary: report.detection_summary,
    })
}
