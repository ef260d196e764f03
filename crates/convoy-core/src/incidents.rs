//! Incident synthesis from detection pipeline reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{NewIncident, Severity};

/// Latitude shift from the reporting unit to the synthesized incident.
pub const DETECTION_OFFSET_LAT: f64 = 0.005;
/// Longitude shift from the reporting unit to the synthesized incident.
pub const DETECTION_OFFSET_LNG: f64 = -0.005;
pub const DETECTION_SEVERITY: Severity = Severity::High;
pub const DETECTION_INTENSITY: i64 = 8;

/// What the detection pipeline reports for one analysed stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Position of the reporting unit
    pub lat: f64,
    pub lng: f64,
    pub threat_detected: bool,
    /// Detections per object class
    #[serde(default)]
    pub detection_summary: BTreeMap<String, u32>,
}

/// The incident a positive detection turns into, placed next to the reporter.
pub fn incident_from_detection(report: &DetectionReport) -> Option<NewIncident> {
    if !report.threat_detected {
        return None;
    }

    Some(NewIncident {
        lat: report.lat + DETECTION_OFFSET_LAT,
        lng: report.lng + DETECTION_OFFSET_LNG,
        severity: DETECTION_SEVERITY,
        intensity: DETECTION_INTENSITY,
    })
}
