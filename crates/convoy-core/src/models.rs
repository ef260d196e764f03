//! Core data models for the convoy coordination system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spatial::{meters_to_degrees, Coordinate};

/// Incident severity as reported by field units and the detection pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// High and Critical incidents are treated as threats by the planner.
    pub fn is_escalated(self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

// ========== THREAT MODELS ==========

/// A persistent danger area drawn on the dashboard map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatZone {
    #[serde(default)]
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    /// Radius in meters
    pub radius: f64,
    pub threat_score: i64,
}

/// A threat zone before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewThreatZone {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub threat_score: i64,
}

/// A reported incident (SOS, detection hit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(default)]
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub intensity: i64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// An incident report before it has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncident {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub severity: Severity,
    pub intensity: i64,
}

/// Circular region the planner must route around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatRegion {
    pub center: Coordinate,
    pub radius_meters: f64,
    #[serde(default)]
    pub score: Option<i64>,
}

impl ThreatRegion {
    pub fn new(center: Coordinate, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
            score: None,
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Radius converted to degrees.
    pub fn angular_radius(&self) -> f64 {
        meters_to_degrees(self.radius_meters)
    }

    /// Plain containment test, boundary inclusive.
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.planar_distance(&self.center) <= self.angular_radius()
    }
}

// ========== ROUTES ==========

/// Ordered traversal sequence: `[start, end]` or `[start, detour, end]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    waypoints: Vec<Coordinate>,
}

impl Route {
    pub fn direct(start: Coordinate, end: Coordinate) -> Self {
        Self {
            waypoints: vec![start, end],
        }
    }

    pub fn with_detour(start: Coordinate, detour: Coordinate, end: Coordinate) -> Self {
        Self {
            waypoints: vec![start, detour, end],
        }
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    /// The detour waypoint, if the route has one.
    pub fn detour(&self) -> Option<Coordinate> {
        match self.waypoints.as_slice() {
            [_, detour, _] => Some(*detour),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.waypoints.iter().map(Coordinate::to_pair).collect()
    }
}

// ========== CONVOYS ==========

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvoyStatus {
    #[default]
    Planning,
    #[serde(rename = "In-Progress")]
    InProgress,
}

/// A convoy with its planned route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Convoy {
    pub id: u64,
    pub name: String,
    pub status: ConvoyStatus,
    pub waypoints: Vec<ConvoyWaypoint>,
    pub created_at: DateTime<Utc>,
}

impl Convoy {
    /// The stored waypoints back in traversal order.
    pub fn route(&self) -> Vec<Coordinate> {
        let mut ordered = self.waypoints.clone();
        ordered.sort_by_key(|wp| wp.sequence);
        ordered
            .into_iter()
            .map(|wp| Coordinate::new(wp.lat, wp.lng))
            .collect()
    }
}

/// A route waypoint stored with its position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvoyWaypoint {
    pub sequence: usize,
    pub lat: f64,
    pub lng: f64,
}

impl ConvoyWaypoint {
    /// Number a route's waypoints in traversal order, starting at 0.
    pub fn sequence(route: &Route) -> Vec<ConvoyWaypoint> {
        route
            .waypoints()
            .iter()
            .enumerate()
            .map(|(sequence, point)| ConvoyWaypoint {
                sequence,
                lat: point.lat,
                lng: point.lng,
            })
            .collect()
    }
}

/// Request to plan a convoy between two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvoyRequest {
    pub name: String,
    pub start: Coordinate,
    pub end: Coordinate,
}

// ========== MESSAGING ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    /// Sender session id
    pub sid: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

// ========== DASHBOARD EVENTS ==========

/// Payload published after a convoy route is planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvoyUpdate {
    pub convoy_id: u64,
    pub name: String,
    /// Waypoints as `[lat, lng]` pairs in traversal order
    pub route: Vec<[f64; 2]>,
}

/// Payload published when a new incident is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentNotice {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub severity: Severity,
}

impl From<&Incident> for IncidentNotice {
    fn from(incident: &Incident) -> Self {
        Self {
            id: incident.id,
            lat: incident.lat,
            lng: incident.lng,
            severity: incident.severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageNotice {
    pub sid: String,
    pub text: String,
}

/// Everything the dashboard broadcaster fans out to listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum DashboardEvent {
    ConvoyUpdate(ConvoyUpdate),
    NewIncident(IncidentNotice),
    Message(MessageNotice),
}
