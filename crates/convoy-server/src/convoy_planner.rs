//! Server-side convoy planning: snapshot, plan, store, publish.

use convoy_core::models::{ConvoyRequest, ConvoyUpdate, DashboardEvent};
use convoy_core::plan_route;

use crate::state::AppState;

/// Plan a route for a new convoy against the current threat picture.
///
/// The convoy is stored as in progress and a `convoy_update` event is
/// published; the same payload is returned to the caller.
pub fn plan_convoy(state: &AppState, request: &ConvoyRequest) -> ConvoyUpdate {
    let snapshot = state.threat_snapshot();
    tracing::info!(
        "Planning route for '{}' from ({:.4}, {:.4}) to ({:.4}, {:.4}) around {} threats",
        request.name,
        request.start.lat,
        request.start.lng,
        request.end.lat,
        request.end.lng,
        snapshot.len()
    );

    let route = plan_route(request.start, request.end, snapshot.regions());
    if let Some(detour) = route.detour() {
        tracing::info!("Detour waypoint at {:.4}, {:.4}", detour.lat, detour.lng);
    }

    let convoy = state.add_convoy(&request.name, &route);
    let update = ConvoyUpdate {
        convoy_id: convoy.id,
        name: convoy.name,
        route: route.to_pairs(),
    };
    state.publish(DashboardEvent::ConvoyUpdate(update.clone()));

    tracing::info!(
        "Convoy '{}' ({}) created with {} waypoints",
        update.name,
        update.convoy_id,
        update.route.len()
    );
    update
}
