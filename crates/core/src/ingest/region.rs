//! Named bounding boxes for filtering detections

use crate::core_types::GeoPoint;
use serde::{Deserialize, Serialize};

/// Inclusive latitude/longitude bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    /// Southern edge
    pub lat_min: f64,
    /// Northern edge
    pub lat_max: f64,
    /// Western edge
    pub lng_min: f64,
    /// Eastern edge
    pub lng_max: f64,
}

impl RegionBounds {
    /// Whole globe
    pub const GLOBAL: RegionBounds = RegionBounds {
        lat_min: -90.0,
        lat_max: 90.0,
        lng_min: -180.0,
        lng_max: 180.0,
    };

    /// California
    pub const CALIFORNIA: RegionBounds = RegionBounds {
        lat_min: 32.0,
        lat_max: 42.0,
        lng_min: -125.0,
        lng_max: -114.0,
    };

    /// Australia
    pub const AUSTRALIA: RegionBounds = RegionBounds {
        lat_min: -44.0,
        lat_max: -10.0,
        lng_min: 112.0,
        lng_max: 155.0,
    };

    /// Morocco
    pub const MOROCCO: RegionBounds = RegionBounds {
        lat_min: 21.0,
        lat_max: 36.0,
        lng_min: -17.0,
        lng_max: -1.0,
    };

    /// Look up a preset by name (case-insensitive). Unknown names fall back
    /// to [`RegionBounds::GLOBAL`].
    pub fn named(name: &str) -> RegionBounds {
        match name.trim().to_ascii_lowercase().as_str() {
            "california" => Self::CALIFORNIA,
            "australia" => Self::AUSTRALIA,
            "morocco" => Self::MOROCCO,
            _ => Self::GLOBAL,
        }
    }

    /// True when the point lies inside or on the boundary
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lng_min..=self.lng_max).contains(&point.lng)
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self::GLOBAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_presets() {
        assert_eq!(RegionBounds::named("Australia"), RegionBounds::AUSTRALIA);
        assert_eq!(RegionBounds::named(" morocco "), RegionBounds::MOROCCO);
        assert_eq!(RegionBounds::named("atlantis"), RegionBounds::GLOBAL);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ca = RegionBounds::CALIFORNIA;
        assert!(ca.contains(GeoPoint::new(34.05, -118.24)));
        assert!(ca.contains(GeoPoint::new(42.0, -125.0)));
        assert!(!ca.contains(GeoPoint::new(42.01, -120.0)));
        assert!(!ca.contains(GeoPoint::new(-33.87, 151.21)));
    }
}
