pub mod detour;
pub mod incidents;
pub mod models;
pub mod planner;
pub mod sampler;
pub mod scenario;
pub mod spatial;
pub mod threat_model;

pub use detour::{synthesize_detour, Detour, DetourSide, DETOUR_OFFSET_FACTOR};
pub use incidents::{incident_from_detection, DetectionReport};
pub use models::{
    ChatMessage, Convoy, ConvoyRequest, ConvoyStatus, ConvoyUpdate, ConvoyWaypoint,
    DashboardEvent, Incident, IncidentNotice, MessageNotice, NewIncident, NewThreatZone, Route,
    Severity, ThreatRegion, ThreatZone,
};
pub use planner::plan_route;
pub use sampler::{find_conflicts, ROUTE_MARGIN_FACTOR, ROUTE_SAMPLE_COUNT};
pub use scenario::seed_threat_zones;
pub use spatial::{meters_to_degrees, Coordinate, METERS_PER_DEGREE};
pub use threat_model::{ThreatModel, ESCALATED_INCIDENT_RADIUS_M};
