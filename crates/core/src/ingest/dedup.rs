//! Removal of near-duplicate detections
//!
//! MODIS and VIIRS often report the same fire; detections closer than the
//! tolerance to one already kept are dropped. First-seen wins.

use crate::core_types::GeoPoint;
use crate::spread::HotspotDetection;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Default duplicate radius in degrees
pub const DEFAULT_DEDUP_TOLERANCE_DEG: f64 = 0.01;

/// Hash a position to a tolerance-sized cell. `None` for non-finite positions.
///
/// The `as` cast saturates, so a tiny tolerance folds far-apart points into
/// the edge cells; the exact distance check still separates them.
fn cell_of(point: GeoPoint, tolerance: f64) -> Option<(i64, i64)> {
    if !(point.lat.is_finite() && point.lng.is_finite()) {
        return None;
    }
    Some((
        (point.lat / tolerance).floor() as i64,
        (point.lng / tolerance).floor() as i64,
    ))
}

/// Drop detections within `tolerance_deg` (strictly closer) of an earlier kept one.
///
/// Uses a hashed cell index sized to the tolerance, so only the 3×3
/// neighbourhood of a candidate is compared. A non-positive or non-finite
/// tolerance keeps everything, as does any detection with a non-finite
/// coordinate.
pub fn deduplicate(detections: Vec<HotspotDetection>, tolerance_deg: f64) -> Vec<HotspotDetection> {
    if !(tolerance_deg.is_finite() && tolerance_deg > 0.0) {
        return detections;
    }

    let mut cells: FxHashMap<(i64, i64), Vec<usize>> =
        FxHashMap::with_capacity_and_hasher(detections.len(), FxBuildHasher);
    let mut kept: Vec<HotspotDetection> = Vec::with_capacity(detections.len());

    for detection in detections {
        let Some((cx, cy)) = cell_of(detection.location, tolerance_deg) else {
            kept.push(detection);
            continue;
        };

        let duplicate = (cx.saturating_sub(1)..=cx.saturating_add(1))
            .flat_map(|x| (cy.saturating_sub(1)..=cy.saturating_add(1)).map(move |y| (x, y)))
            .filter_map(|cell| cells.get(&cell))
            .flatten()
            .any(|&idx| kept[idx].location.degree_distance(detection.location) < tolerance_deg);

        if !duplicate {
            cells.entry((cx, cy)).or_default().push(kept.len());
            kept.push(detection);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Kelvin;
    use crate::spread::Confidence;
    use chrono::{TimeZone, Utc};

    fn at(lat: f64, lng: f64, brightness: f32) -> HotspotDetection {
        HotspotDetection::new(
            GeoPoint::new(lat, lng),
            Kelvin::new(brightness),
            Confidence::High,
            Utc.with_ymd_and_hms(2025, 8, 1, 13, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_first_seen_wins() {
        let kept = deduplicate(
            vec![at(34.0, -118.0, 330.0), at(34.005, -118.005, 360.0)],
            DEFAULT_DEDUP_TOLERANCE_DEG,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(*kept[0].brightness, 330.0);
    }

    #[test]
    fn test_neighbour_across_cell_boundary() {
        // 0.0999 and 0.1001 land in different cells but are 0.0002° apart
        let kept = deduplicate(
            vec![at(0.0999, 5.0, 320.0), at(0.1001, 5.0, 320.0)],
            DEFAULT_DEDUP_TOLERANCE_DEG,
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_distinct_fires_survive() {
        let kept = deduplicate(
            vec![at(34.0, -118.0, 330.0), at(34.02, -118.0, 330.0), at(34.0, -118.011, 330.0)],
            DEFAULT_DEDUP_TOLERANCE_DEG,
        );
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_tiny_tolerance_at_cell_index_limits() {
        // -170 / 1e-17 saturates the i64 cell index
        let kept = deduplicate(vec![at(89.0, 10.0, 320.0), at(-89.0, -170.0, 320.0)], 1e-17);
        assert_eq!(kept.len(), 2);

        let same = deduplicate(vec![at(-89.0, -170.0, 320.0), at(-89.0, -170.0, 330.0)], 1e-17);
        assert_eq!(same.len(), 1);
    }

    #[test]
    fn test_non_finite_coordinates_are_kept() {
        let kept = deduplicate(
            vec![
                at(f64::INFINITY, 10.0, 320.0),
                at(f64::INFINITY, 10.0, 320.0),
                at(34.0, f64::NAN, 320.0),
                at(34.0, -118.0, 320.0),
            ],
            DEFAULT_DEDUP_TOLERANCE_DEG,
        );
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_invalid_tolerance_keeps_all() {
        let input = vec![at(1.0, 1.0, 300.0), at(1.0, 1.0, 300.0)];
        assert_eq!(deduplicate(input.clone(), 0.0).len(), 2);
        assert_eq!(deduplicate(input, f64::NAN).len(), 2);
    }
}
