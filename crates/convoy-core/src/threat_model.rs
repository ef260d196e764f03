//! Snapshot of the danger regions a single planning call routes around.

use crate::models::{Incident, ThreatRegion, ThreatZone};
use crate::spatial::Coordinate;

/// Radius given to escalated incidents, which carry no radius of their own.
pub const ESCALATED_INCIDENT_RADIUS_M: f64 = 500.0;

/// Read-only set of threat regions.
///
/// Zones come first (radius as stored), followed by High/Critical incidents.
/// Overlapping entries from the two sources are kept as independent regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatModel {
    regions: Vec<ThreatRegion>,
}

impl ThreatModel {
    pub fn from_sources(zones: &[ThreatZone], incidents: &[Incident]) -> Self {
        let zone_regions = zones.iter().map(|zone| {
            ThreatRegion::new(Coordinate::new(zone.lat, zone.lng), zone.radius)
                .with_score(zone.threat_score)
        });
        let incident_regions = incidents
            .iter()
            .filter(|incident| incident.severity.is_escalated())
            .map(|incident| {
                ThreatRegion::new(
                    Coordinate::new(incident.lat, incident.lng),
                    ESCALATED_INCIDENT_RADIUS_M,
                )
            });

        Self {
            regions: zone_regions.chain(incident_regions).collect(),
        }
    }

    pub fn regions(&self) -> &[ThreatRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
