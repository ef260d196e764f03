//! Threat-aware route builder.
//!
//! Classifies the direct segment with the sampler and, when it crosses a
//! threat, inserts one detour waypoint. Every call is a pure function of its
//! inputs and the named constants in [`crate::sampler`], [`crate::detour`]
//! and [`crate::spatial`].

use crate::detour::synthesize_detour;
use crate::models::{Route, ThreatRegion};
use crate::sampler::find_conflicts;
use crate::spatial::Coordinate;

/// Plan a route from `start` to `end` around `threats`.
///
/// Never fails. A zero-length request (`start == end`) has no direction to
/// detour along and is answered with the direct route.
pub fn plan_route(start: Coordinate, end: Coordinate, threats: &[ThreatRegion]) -> Route {
    if start == end {
        tracing::warn!(
            lat = start.lat,
            lng = start.lng,
            "zero-length route requested, returning direct route"
        );
        return Route::direct(start, end);
    }

    let conflicts = find_conflicts(&start, &end, threats);
    let Some(detour) = synthesize_detour(&start, &end, &conflicts, threats) else {
        tracing::debug!(threats = threats.len(), "direct route is clear");
        return Route::direct(start, end);
    };

    tracing::debug!(
        conflicts = conflicts.len(),
        lat = detour.waypoint.lat,
        lng = detour.waypoint.lng,
        side = ?detour.side,
        "detour waypoint synthesized"
    );
    Route::with_detour(start, detour.waypoint, end)
}
