//! Six-hour spread radius estimate for a detected hotspot
//!
//! ```text
//! radius = round₁(base + brightness + confidence + wind), floored at 0
//! ```
//!
//! - base: 3.0 km
//! - brightness: +3.0 km above 350 K, +1.5 km above 320 K, else 0 (step, no interpolation)
//! - confidence: +1.0 km for High, -0.5 km for Low
//! - wind: caller-supplied perturbation, nominally within ±2.0 km
//!
//! The estimator never draws random numbers itself. Callers sample the wind
//! term (see [`SpreadConfig::sample_wind_perturbation`]) and pass it in, so the
//! same inputs always reproduce the same prediction.

use super::detection::{Confidence, HotspotDetection};
use crate::core_types::{Kelvin, Kilometers};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Additive breakdown of a spread radius, in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpreadComponents {
    /// Fixed base spread
    pub base: f32,
    /// Thermal intensity step
    pub brightness_factor: f32,
    /// Detection confidence adjustment
    pub confidence_factor: f32,
    /// Wind variability perturbation
    pub wind_factor: f32,
}

impl SpreadComponents {
    /// Unrounded sum of all components
    pub fn total(&self) -> f32 {
        self.base + self.brightness_factor + self.confidence_factor + self.wind_factor
    }
}

/// Predicted spread radius with its breakdown
///
/// `radius` equals `components.total()` rounded to 0.1 km (and floored at
/// zero), so the two agree within 0.05 km unless the floor applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadPrediction {
    /// Rounded radius
    pub radius: Kilometers,
    /// Unrounded components
    pub components: SpreadComponents,
}

impl SpreadPrediction {
    /// Radius as a raw km value
    pub fn radius_km(&self) -> f32 {
        *self.radius
    }
}

/// Tunable constants of the spread heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadConfig {
    /// Six-hour base spread (km)
    pub base_rate_km: f32,
    /// Brightness above which the moderate step applies (K)
    pub moderate_brightness_k: f32,
    /// Moderate step (km)
    pub moderate_brightness_km: f32,
    /// Brightness above which the intense step applies (K)
    pub intense_brightness_k: f32,
    /// Intense step (km)
    pub intense_brightness_km: f32,
    /// Adjustment for high-confidence detections (km)
    pub high_confidence_km: f32,
    /// Adjustment for low-confidence detections (km)
    pub low_confidence_km: f32,
    /// Half-width of the wind perturbation range (km)
    pub wind_perturbation_bound_km: f32,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        SpreadConfig {
            base_rate_km: 3.0,
            moderate_brightness_k: 320.0,
            moderate_brightness_km: 1.5,
            intense_brightness_k: 350.0,
            intense_brightness_km: 3.0,
            high_confidence_km: 1.0,
            low_confidence_km: -0.5,
            wind_perturbation_bound_km: 2.0,
        }
    }
}

impl SpreadConfig {
    /// Two-tier thermal step
    pub fn brightness_factor(&self, brightness: Kelvin) -> f32 {
        if *brightness > self.intense_brightness_k {
            self.intense_brightness_km
        } else if *brightness > self.moderate_brightness_k {
            self.moderate_brightness_km
        } else {
            0.0
        }
    }

    /// Confidence adjustment
    pub fn confidence_factor(&self, confidence: Confidence) -> f32 {
        match confidence {
            Confidence::High => self.high_confidence_km,
            Confidence::Low => self.low_confidence_km,
        }
    }

    /// Estimate from raw thermal and confidence signals.
    ///
    /// `wind_perturbation_km` is passed through unchanged as the wind
    /// component; out-of-contract values are not clamped here, only the final
    /// radius is floored at zero.
    pub fn estimate_for(
        &self,
        brightness: Kelvin,
        confidence: Confidence,
        wind_perturbation_km: f32,
    ) -> SpreadPrediction {
        let components = SpreadComponents {
            base: self.base_rate_km,
            brightness_factor: self.brightness_factor(brightness),
            confidence_factor: self.confidence_factor(confidence),
            wind_factor: wind_perturbation_km,
        };
        let rounded = round_tenth(components.total());
        // Also maps -0.0 and NaN to +0.0
        let radius = if rounded > 0.0 { rounded } else { 0.0 };

        SpreadPrediction {
            radius: Kilometers::new(radius),
            components,
        }
    }

    /// Estimate the spread of a detection
    pub fn estimate(
        &self,
        detection: &HotspotDetection,
        wind_perturbation_km: f32,
    ) -> SpreadPrediction {
        self.estimate_for(detection.brightness, detection.confidence, wind_perturbation_km)
    }

    /// Draw a wind perturbation uniformly from `[-bound, +bound]`.
    /// A zero, negative or non-finite bound draws nothing and returns 0.
    pub fn sample_wind_perturbation<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let bound = self.wind_perturbation_bound_km;
        if bound.is_finite() && bound > 0.0 {
            rng.random_range(-bound..=bound)
        } else {
            0.0
        }
    }

    /// Clamp an externally supplied perturbation into `[-bound, +bound]`.
    /// NaN on either side yields 0.
    pub fn clamp_wind_perturbation(&self, wind_perturbation_km: f32) -> f32 {
        let bound = self.wind_perturbation_bound_km.abs();
        if wind_perturbation_km.is_nan() || bound.is_nan() {
            return 0.0;
        }
        wind_perturbation_km.clamp(-bound, bound)
    }

    /// Pair each detection with its prediction. `wind` supplies the
    /// perturbation for each detection, in order.
    pub fn assess<F>(&self, detections: &[HotspotDetection], mut wind: F) -> Vec<AssessedHotspot>
    where
        F: FnMut(&HotspotDetection) -> f32,
    {
        detections
            .iter()
            .map(|detection| AssessedHotspot {
                prediction: self.estimate(detection, wind(detection)),
                detection: detection.clone(),
            })
            .collect()
    }
}

/// A detection with its spread prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedHotspot {
    /// Source detection
    pub detection: HotspotDetection,
    /// Predicted spread
    pub prediction: SpreadPrediction,
}

/// Round to one decimal place
fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Estimate spread with the default heuristic
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use fire_risk_core::{spread, Confidence, GeoPoint, HotspotDetection, Kelvin};
///
/// let hotspot = HotspotDetection::new(
///     GeoPoint::new(34.05, -118.24),
///     Kelvin::new(360.0),
///     Confidence::from_token("high"),
///     Utc::now(),
/// );
/// let p = spread::estimate_spread(&hotspot, 0.0);
/// assert_eq!(p.radius_km(), 7.0);
/// ```
pub fn estimate_spread(detection: &HotspotDetection, wind_perturbation_km: f32) -> SpreadPrediction {
    SpreadConfig::default().estimate(detection, wind_perturbation_km)
}

/// Assess detections with the default heuristic
pub fn assess_hotspots<F>(detections: &[HotspotDetection], wind: F) -> Vec<AssessedHotspot>
where
    F: FnMut(&HotspotDetection) -> f32,
{
    SpreadConfig::default().assess(detections, wind)
}

/// Number of high-confidence detections
pub fn count_high_confidence(detections: &[HotspotDetection]) -> usize {
    detections
        .iter()
        .filter(|d| d.confidence == Confidence::High)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_brightness_steps() {
        let config = SpreadConfig::default();
        assert_eq!(config.brightness_factor(Kelvin::new(300.0)), 0.0);
        assert_eq!(config.brightness_factor(Kelvin::new(320.0)), 0.0);
        assert_eq!(config.brightness_factor(Kelvin::new(320.5)), 1.5);
        assert_eq!(config.brightness_factor(Kelvin::new(350.0)), 1.5);
        assert_eq!(config.brightness_factor(Kelvin::new(350.1)), 3.0);
    }

    #[test]
    fn test_intense_high_confidence_calm() {
        let p = SpreadConfig::default().estimate_for(Kelvin::new(360.0), Confidence::High, 0.0);
        assert_eq!(p.radius_km(), 7.0);
        assert_eq!(
            p.components,
            SpreadComponents {
                base: 3.0,
                brightness_factor: 3.0,
                confidence_factor: 1.0,
                wind_factor: 0.0,
            }
        );
    }

    #[test]
    fn test_cool_low_confidence_headwind() {
        let p = SpreadConfig::default().estimate_for(Kelvin::new(300.0), Confidence::Low, -2.0);
        assert_eq!(p.radius_km(), 0.5);
        assert_eq!(p.components.wind_factor, -2.0);
    }

    #[test]
    fn test_out_of_contract_wind_floors_at_zero() {
        let p = SpreadConfig::default().estimate_for(Kelvin::new(300.0), Confidence::Low, -9.0);
        assert_eq!(p.radius_km(), 0.0);
        assert_eq!(p.components.wind_factor, -9.0);

        let nan = SpreadConfig::default().estimate_for(Kelvin::new(300.0), Confidence::Low, f32::NAN);
        assert_eq!(nan.radius_km(), 0.0);
    }

    #[test]
    fn test_floored_radius_is_positive_zero() {
        // 3.0 - 0.5 - 2.54 = -0.04, which rounds to -0.0
        let p = SpreadConfig::default().estimate_for(Kelvin::new(300.0), Confidence::Low, -2.54);
        assert_eq!(p.radius_km(), 0.0);
        assert!(!p.radius_km().is_sign_negative());
        assert_eq!(p.radius.to_string(), "0.0 km");
    }

    #[test]
    fn test_radius_rounds_to_tenth() {
        let p = SpreadConfig::default().estimate_for(Kelvin::new(330.0), Confidence::High, 1.234);
        assert_relative_eq!(p.radius_km(), 6.7, epsilon = 1e-5);
        assert!((p.radius_km() - p.components.total()).abs() <= 0.05);
    }

    #[test]
    fn test_sampled_perturbation_within_bound() {
        let config = SpreadConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let w = config.sample_wind_perturbation(&mut rng);
            assert!((-2.0..=2.0).contains(&w), "{w}");
        }

        let still = SpreadConfig {
            wind_perturbation_bound_km: 0.0,
            ..SpreadConfig::default()
        };
        assert_eq!(still.sample_wind_perturbation(&mut rng), 0.0);
    }

    #[test]
    fn test_clamp_wind_perturbation() {
        let config = SpreadConfig::default();
        assert_eq!(config.clamp_wind_perturbation(-5.0), -2.0);
        assert_eq!(config.clamp_wind_perturbation(1.25), 1.25);
        assert_eq!(config.clamp_wind_perturbation(f32::NAN), 0.0);
    }
}
