//! Single-waypoint detour synthesis around the most relevant conflict.
//!
//! The detour is best effort: the primary candidate sits on the left of the
//! route, and if that lands inside any known region the mirror candidate on
//! the right is used as-is. There is no further search and no error path, so
//! a convoy is never blocked by planning; callers treat the route as advisory.

use crate::models::ThreatRegion;
use crate::spatial::{meters_to_degrees, Coordinate, Vector2};

/// Detour distance from the region center, in multiples of its radius.
pub const DETOUR_OFFSET_FACTOR: f64 = 2.0;

/// Which side of the route the chosen waypoint lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetourSide {
    /// Along the left-hand perpendicular of the route direction.
    Primary,
    /// Mirror of the primary candidate, used when the primary was unsafe.
    Opposite,
}

/// Outcome of detour synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Detour<'a> {
    pub waypoint: Coordinate,
    pub side: DetourSide,
    /// The conflict the waypoint was built around.
    pub around: &'a ThreatRegion,
}

/// Conflict closest to the route midpoint. Ties keep the earliest entry.
pub fn nearest_conflict<'a>(
    midpoint: &Coordinate,
    conflicts: &[&'a ThreatRegion],
) -> Option<&'a ThreatRegion> {
    conflicts.iter().copied().min_by(|a, b| {
        midpoint
            .planar_distance(&a.center)
            .total_cmp(&midpoint.planar_distance(&b.center))
    })
}

/// Build a detour waypoint for a route that crosses `conflicts`.
///
/// `threats` is the full snapshot used for the safety re-check. Returns
/// `None` only when `conflicts` is empty.
///
/// A zero-length route has no direction; the offset then collapses and the
/// waypoint coincides with the conflict center.
pub fn synthesize_detour<'a>(
    start: &Coordinate,
    end: &Coordinate,
    conflicts: &[&'a ThreatRegion],
    threats: &[ThreatRegion],
) -> Option<Detour<'a>> {
    let midpoint = start.midpoint(end);
    let around = nearest_conflict(&midpoint, conflicts)?;

    let direction = Vector2::between(start, end).perpendicular().normalized();
    let offset = DETOUR_OFFSET_FACTOR * meters_to_degrees(around.radius_meters);

    let primary = around.center.offset(direction, offset);
    if is_clear(&primary, threats) {
        return Some(Detour {
            waypoint: primary,
            side: DetourSide::Primary,
            around,
        });
    }

    tracing::debug!(
        lat = primary.lat,
        lng = primary.lng,
        "primary detour lands in a threat region, using opposite side"
    );
    Some(Detour {
        waypoint: around.center.offset(direction.negated(), offset),
        side: DetourSide::Opposite,
        around,
    })
}

fn is_clear(point: &Coordinate, threats: &[ThreatRegion]) -> bool {
    !threats.iter().any(|region| region.contains(point))
}
