//! Threat snapshot files for offline planning.
//!
//! The format matches what the server lists at `/api/threat_zones` and
//! `/api/incidents`, wrapped in one object:
//!
//! ```json
//! { "threat_zones": [{"lat": 28.62, "lng": 77.21, "radius": 800, "threat_score": 8}],
//!   "incidents":    [{"lat": 28.60, "lng": 77.19, "severity": "High"}] }
//! ```

use anyhow::{Context, Result};
use convoy_core::models::{Incident, ThreatZone};
use convoy_core::ThreatModel;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreatSnapshot {
    #[serde(default)]
    pub threat_zones: Vec<ThreatZone>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

impl ThreatSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read threat snapshot {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid threat snapshot {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn threat_model(&self) -> ThreatModel {
        ThreatModel::from_sources(&self.threat_zones, &self.incidents)
    }
}
