//! Incident intake from SOS reports and the detection pipeline.

use convoy_core::models::{DashboardEvent, Incident, IncidentNotice, NewIncident};
use convoy_core::{incident_from_detection, DetectionReport};

use crate::state::AppState;

/// Store an incident and announce it to dashboard listeners.
pub fn record_incident(state: &AppState, report: NewIncident) -> Incident {
    let incident = state.add_incident(report);
    tracing::info!(
        "Incident {} recorded at {:.4}, {:.4} ({:?})",
        incident.id,
        incident.lat,
        incident.lng,
        incident.severity
    );
    state.publish(DashboardEvent::NewIncident(IncidentNotice::from(&incident)));
    incident
}

/// Turn a detection report into an incident when it flags a threat.
pub fn record_detection(state: &AppState, report: &DetectionReport) -> Option<Incident> {
    let incident = incident_from_detection(report)?;
    Some(record_incident(state, incident))
}
