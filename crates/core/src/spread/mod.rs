//! Hotspot spread estimation
//!
//! Turns satellite fire detections into six-hour spread radius predictions.

pub mod detection;
pub mod estimator;

pub use detection::{Confidence, HotspotDetection, Satellite};
pub use estimator::{
    assess_hotspots, count_high_confidence, estimate_spread, AssessedHotspot, SpreadComponents,
    SpreadConfig, SpreadPrediction,
};
