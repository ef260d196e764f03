//! Demo scenario seeding around an operator-chosen location.

use crate::models::NewThreatZone;
use crate::spatial::Coordinate;

/// Threat zones placed around `center` when a scenario is initialized.
pub fn seed_threat_zones(center: Coordinate) -> Vec<NewThreatZone> {
    vec![
        NewThreatZone {
            lat: center.lat + 0.02,
            lng: center.lng + 0.01,
            radius: 800.0,
            threat_score: 8,
        },
        NewThreatZone {
            lat: center.lat - 0.01,
            lng: center.lng - 0.015,
            radius: 600.0,
            threat_score: 10,
        },
    ]
}
