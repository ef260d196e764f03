//! Planar geometry for route planning.
//!
//! All distance math here works directly in degree space, treating latitude
//! and longitude as orthogonal axes of a flat plane. That approximation is
//! only accurate at metropolitan scale (tens of kilometres, away from the
//! poles); it is the accuracy bound of the planner, not a defect.

use serde::{Deserialize, Serialize};

/// Meters covered by one degree in the flat-earth approximation.
///
/// Every meter/degree conversion in the crate goes through
/// [`meters_to_degrees`], so swapping in a latitude-aware model is a
/// one-point change.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Convert a distance in meters to the equivalent angular distance in degrees.
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// A latitude/longitude pair in decimal degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar Euclidean distance to `other`, in degrees.
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }

    /// Point at `fraction` of the way from `self` towards `other`.
    pub fn interpolate(&self, other: &Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + fraction * (other.lat - self.lat),
            lng: self.lng + fraction * (other.lng - self.lng),
        }
    }

    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }

    /// Move by `scale` units along `direction`.
    pub fn offset(&self, direction: Vector2, scale: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + direction.d_lat * scale,
            lng: self.lng + direction.d_lng * scale,
        }
    }

    /// `[lat, lng]` pair as the dashboard map layer consumes it.
    pub fn to_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Displacement in degree space, expressed in (lat, lng) components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub d_lat: f64,
    pub d_lng: f64,
}

impl Vector2 {
    /// Vector pointing from `from` to `to`.
    pub fn between(from: &Coordinate, to: &Coordinate) -> Self {
        Self {
            d_lat: to.lat - from.lat,
            d_lng: to.lng - from.lng,
        }
    }

    /// Left-hand perpendicular: `(-d_lng, d_lat)`.
    pub fn perpendicular(&self) -> Self {
        Self {
            d_lat: -self.d_lng,
            d_lng: self.d_lat,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.d_lat * self.d_lat + self.d_lng * self.d_lng).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            Self {
                d_lat: self.d_lat / magnitude,
                d_lng: self.d_lng / magnitude,
            }
        } else {
            *self
        }
    }

    pub fn negated(&self) -> Self {
        Self {
            d_lat: -self.d_lat,
            d_lng: -self.d_lng,
        }
    }
}
