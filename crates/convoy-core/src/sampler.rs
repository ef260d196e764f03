//! Straight-line route sampling against threat regions.

use crate::models::ThreatRegion;
use crate::spatial::Coordinate;

/// Interior sample points tested along a segment.
pub const ROUTE_SAMPLE_COUNT: usize = 100;

/// Slack applied to each region's radius while sampling, covering the gaps
/// between samples and the flat-earth approximation.
pub const ROUTE_MARGIN_FACTOR: f64 = 1.1;

/// Interior sample points of the segment, at fractions `i / (N + 1)`.
///
/// The endpoints themselves are never produced: origin and destination are
/// assumed to be safe by the caller.
pub fn sample_points(start: &Coordinate, end: &Coordinate) -> impl Iterator<Item = Coordinate> {
    let start = *start;
    let end = *end;
    let divisions = (ROUTE_SAMPLE_COUNT + 1) as f64;
    (1..=ROUTE_SAMPLE_COUNT).map(move |i| start.interpolate(&end, i as f64 / divisions))
}

/// Whether `point` falls inside `region` once the sampling margin is applied.
pub fn within_margin(region: &ThreatRegion, point: &Coordinate) -> bool {
    point.planar_distance(&region.center) <= region.angular_radius() * ROUTE_MARGIN_FACTOR
}

/// Threat regions the direct segment from `start` to `end` passes through.
///
/// Regions are returned in the order a sample first hit them, without
/// duplicates (by value). An empty result means the direct route is clear.
pub fn find_conflicts<'a>(
    start: &Coordinate,
    end: &Coordinate,
    threats: &'a [ThreatRegion],
) -> Vec<&'a ThreatRegion> {
    if threats.is_empty() {
        return Vec::new();
    }

    let mut flagged = vec![false; threats.len()];
    let mut conflicts: Vec<&ThreatRegion> = Vec::new();

    for (sample_index, point) in sample_points(start, end).enumerate() {
        for (region_index, region) in threats.iter().enumerate() {
            if flagged[region_index] || !within_margin(region, &point) {
                continue;
            }
            flagged[region_index] = true;
            if !conflicts.contains(&region) {
                tracing::debug!(
                    sample = sample_index + 1,
                    lat = region.center.lat,
                    lng = region.center.lng,
                    radius_m = region.radius_meters,
                    "threat on route"
                );
                conflicts.push(region);
            }
        }

        if flagged.iter().all(|hit| *hit) {
            break;
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(lat: f64, lng: f64, radius_m: f64) -> ThreatRegion {
        ThreatRegion::new(Coordinate::new(lat, lng), radius_m)
    }

    fn segment() -> (Coordinate, Coordinate) {
        (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0))
    }

    #[test]
    fn samples_exclude_endpoints() {
        let (start, end) = segment();
        let samples: Vec<Coordinate> = sample_points(&start, &end).collect();
        assert_eq!(samples.len(), ROUTE_SAMPLE_COUNT);
        assert!((samples[0].lng - 1.0 / 101.0).abs() < 1e-12);
        assert!((samples[99].lng - 100.0 / 101.0).abs() < 1e-12);
        assert!(!samples.contains(&start));
        assert!(!samples.contains(&end));
    }

    #[test]
    fn no_threats_means_no_conflicts() {
        let (start, end) = segment();
        assert!(find_conflicts(&start, &end, &[]).is_empty());
    }

    #[test]
    fn region_on_the_path_is_flagged() {
        let (start, end) = segment();
        let threats = vec![region(0.0, 0.5, 5_000.0)];
        let conflicts = find_conflicts(&start, &end, &threats);
        assert_eq!(conflicts, vec![&threats[0]]);
    }

    #[test]
    fn distant_region_is_ignored() {
        let (start, end) = segment();
        let threats = vec![region(10.0, 10.0, 1_000.0)];
        assert!(find_conflicts(&start, &end, &threats).is_empty());
    }

    #[test]
    fn margin_extends_the_radius_by_ten_percent() {
        let (start, end) = segment();
        // Sample 50 sits at lng 50/101; put the center 1.05 radii north of it.
        let radius_m = 1_000.0;
        let sample_lng = 50.0 / 101.0;
        let inside_margin = 1.05 * radius_m / 111_320.0;
        let outside_margin = 1.15 * radius_m / 111_320.0;

        let near = vec![region(inside_margin, sample_lng, radius_m)];
        assert_eq!(find_conflicts(&start, &end, &near).len(), 1);

        let far = vec![region(outside_margin, sample_lng, radius_m)];
        assert!(find_conflicts(&start, &end, &far).is_empty());
    }

    #[test]
    fn endpoints_alone_never_trigger() {
        let (start, end) = segment();
        // Covers the start point but none of the interior samples.
        let threats = vec![region(0.0, 0.0, 100.0)];
        assert!(find_conflicts(&start, &end, &threats).is_empty());
    }

    #[test]
    fn conflicts_follow_first_hit_order() {
        let (start, end) = segment();
        let threats = vec![region(0.0, 0.8, 1_000.0), region(0.0, 0.2, 1_000.0)];
        let conflicts = find_conflicts(&start, &end, &threats);
        assert_eq!(conflicts, vec![&threats[1], &threats[0]]);
    }

    #[test]
    fn equal_regions_are_reported_once() {
        let (start, end) = segment();
        let threats = vec![region(0.0, 0.5, 2_000.0), region(0.0, 0.5, 2_000.0)];
        assert_eq!(find_conflicts(&start, &end, &threats).len(), 1);
    }

    #[test]
    fn overlapping_regions_are_all_reported() {
        let (start, end) = segment();
        let threats = vec![region(0.0, 0.5, 2_000.0), region(0.001, 0.5, 3_000.0)];
        assert_eq!(find_conflicts(&start, &end, &threats).len(), 2);
    }
}
