//! Geographic coordinates for grid samples and satellite detections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new position
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Shift by angular deltas. No wrapping is applied at the poles or the
    /// antimeridian; grid spans are fractions of a degree.
    #[must_use]
    pub fn offset(self, lat_delta: f64, lng_delta: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + lat_delta,
            lng: self.lng + lng_delta,
        }
    }

    /// Planar distance in degrees.
    ///
    /// Only meaningful for near neighbours (duplicate detection), where the
    /// curvature error is far below the tolerance being tested.
    #[must_use]
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        dlat.hypot(dlng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
