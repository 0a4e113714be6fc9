//! Fire Weather Danger Score
//!
//! Converts a point [`WeatherObservation`] into a bounded 0-100 danger score
//! and a discrete [`DangerTier`].
//!
//! # Heuristic
//!
//! ```text
//! dryness = max(0, 100 - RH) × 0.8
//! heat    = max(0, T - 10) × 1.5
//! wind    = min(V × 1.2, 40)
//! raw     = dryness × 0.5 + heat × 0.3 + wind × 0.2
//! raw    ×= 1.3   if T > 30 and RH < 30   (hot and dry)
//! raw    ×= 1.2   if V > 30               (wind driven)
//! score   = round(min(raw, 100)), clamped to [0, 100]
//! ```
//!
//! Where T is air temperature (°C), RH relative humidity (%) and V wind
//! speed (km/h, negative read as calm).
//!
//! The thresholds and weights are product heuristics, not a validated
//! physical model such as `McArthur`'s FFDI. They live in [`DangerConfig`] so
//! they can be tuned without touching the scoring code.

mod forecast;

pub use forecast::ForecastOutlook;

use crate::core_types::WeatherObservation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the danger scale
pub const MAX_SCORE: f32 = 100.0;

/// Discrete severity tier of a danger score
///
/// Ordered from least to most severe so tiers can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerTier {
    /// Score <= 20
    Low,
    /// Score in (20, 40]
    Moderate,
    /// Score in (40, 60]
    High,
    /// Score in (60, 80]
    VeryHigh,
    /// Score > 80
    Extreme,
}

impl DangerTier {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DangerTier::Low => "Low",
            DangerTier::Moderate => "Moderate",
            DangerTier::High => "High",
            DangerTier::VeryHigh => "Very High",
            DangerTier::Extreme => "Extreme",
        }
    }

    /// Map/legend color for the tier
    pub fn color_hex(self) -> &'static str {
        match self {
            DangerTier::Low => "#4ade80",
            DangerTier::Moderate => "#fb923c",
            DangerTier::High => "#f87171",
            DangerTier::VeryHigh => "#dc2626",
            DangerTier::Extreme => "#a855f7",
        }
    }
}

impl fmt::Display for DangerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fire Weather Danger Score with its tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerScore {
    /// Whole-number score in `[0, 100]`
    pub value: f32,
    /// Tier derived from `value`
    pub tier: DangerTier,
}

impl fmt::Display for DangerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ({})", self.value, self.tier)
    }
}

/// Lower bounds (exclusive) of each tier above Low
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Above this the tier is at least Moderate
    pub moderate: f32,
    /// Above this the tier is at least High
    pub high: f32,
    /// Above this the tier is at least Very High
    pub very_high: f32,
    /// Above this the tier is Extreme
    pub extreme: f32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            moderate: 20.0,
            high: 40.0,
            very_high: 60.0,
            extreme: 80.0,
        }
    }
}

impl TierThresholds {
    /// Classify a score. Bounds are exclusive: exactly 80 is Very High.
    pub fn classify(&self, score: f32) -> DangerTier {
        match score {
            s if s > self.extreme => DangerTier::Extreme,
            s if s > self.very_high => DangerTier::VeryHigh,
            s if s > self.high => DangerTier::High,
            s if s > self.moderate => DangerTier::Moderate,
            _ => DangerTier::Low,
        }
    }

    /// True when every bound is finite and strictly increasing
    pub fn is_ascending(&self) -> bool {
        let bounds = [self.moderate, self.high, self.very_high, self.extreme];
        bounds.iter().all(|b| b.is_finite()) && bounds.windows(2).all(|w| w[0] < w[1])
    }
}

/// Tunable constants of the danger heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DangerConfig {
    /// Dryness points per % of humidity deficit
    pub dryness_factor: f32,
    /// Temperature (°C) at and below which heat contributes nothing
    pub heat_base_c: f32,
    /// Heat points per °C above `heat_base_c`
    pub heat_factor: f32,
    /// Wind points per km/h
    pub wind_factor: f32,
    /// Saturation of the wind term
    pub wind_cap: f32,
    /// Weight of the dryness term in the raw score
    pub dryness_weight: f32,
    /// Weight of the heat term in the raw score
    pub heat_weight: f32,
    /// Weight of the wind term in the raw score
    pub wind_weight: f32,
    /// Hot-and-dry amplification applies above this temperature (°C)
    pub hot_dry_temperature_c: f32,
    /// Hot-and-dry amplification applies below this humidity (%)
    pub hot_dry_humidity_pct: f32,
    /// Hot-and-dry multiplier
    pub hot_dry_multiplier: f32,
    /// Wind-driven amplification applies above this speed (km/h)
    pub strong_wind_kph: f32,
    /// Wind-driven multiplier
    pub strong_wind_multiplier: f32,
    /// Tier bounds
    pub tiers: TierThresholds,
}

impl Default for DangerConfig {
    fn default() -> Self {
        DangerConfig {
            dryness_factor: 0.8,
            heat_base_c: 10.0,
            heat_factor: 1.5,
            wind_factor: 1.2,
            wind_cap: 40.0,
            dryness_weight: 0.5,
            heat_weight: 0.3,
            wind_weight: 0.2,
            hot_dry_temperature_c: 30.0,
            hot_dry_humidity_pct: 30.0,
            hot_dry_multiplier: 1.3,
            strong_wind_kph: 30.0,
            strong_wind_multiplier: 1.2,
            tiers: TierThresholds::default(),
        }
    }
}

impl DangerConfig {
    /// Unrounded, unclamped score including the compound multipliers.
    ///
    /// Never NaN and never negative for a config with non-negative weights:
    /// each term is guarded with `max(0, ..)`, which also absorbs NaN readings.
    pub fn raw_score(&self, observation: &WeatherObservation) -> f32 {
        let temperature = *observation.temperature;
        let humidity = *observation.humidity;
        let wind = *observation.wind_speed.non_negative();

        let dryness = (100.0 - humidity).max(0.0) * self.dryness_factor;
        let heat = (temperature - self.heat_base_c).max(0.0) * self.heat_factor;
        let wind_term = (wind * self.wind_factor).min(self.wind_cap);

        let mut raw = dryness * self.dryness_weight
            + heat * self.heat_weight
            + wind_term * self.wind_weight;

        if temperature > self.hot_dry_temperature_c && humidity < self.hot_dry_humidity_pct {
            raw *= self.hot_dry_multiplier;
        }
        if wind > self.strong_wind_kph {
            raw *= self.strong_wind_multiplier;
        }

        if raw.is_nan() {
            0.0
        } else {
            raw
        }
    }

    /// Score an observation. Total: out-of-range input is clamped, never rejected.
    pub fn score(&self, observation: &WeatherObservation) -> DangerScore {
        let value = self.raw_score(observation).min(MAX_SCORE).round().clamp(0.0, MAX_SCORE);
        DangerScore {
            value,
            tier: self.tiers.classify(value),
        }
    }
}

/// Score an observation with the default heuristic
///
/// # Example
///
/// ```
/// use fire_risk_core::{danger, DangerTier, WeatherObservation};
///
/// // Hot, dry and windy: both multipliers apply
/// let s = danger::score(&WeatherObservation::new(38.0, 15.0, 35.0));
/// assert_eq!(s.value, 85.0);
/// assert_eq!(s.tier, DangerTier::Extreme);
/// ```
pub fn score(observation: &WeatherObservation) -> DangerScore {
    DangerConfig::default().score(observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cool_humid_calm_is_low() {
        let s = score(&WeatherObservation::new(20.0, 90.0, 5.0));
        // 8×0.5 + 15×0.3 + 6×0.2 = 9.7
        assert_eq!(s.value, 10.0);
        assert_eq!(s.tier, DangerTier::Low);
    }

    #[test]
    fn test_hot_dry_windy_is_extreme() {
        let config = DangerConfig::default();
        let obs = WeatherObservation::new(38.0, 15.0, 35.0);
        // (34 + 12.6 + 8) × 1.3 × 1.2
        assert_relative_eq!(config.raw_score(&obs), 85.176, epsilon = 1e-3);
        let s = config.score(&obs);
        assert_eq!(s.value, 85.0);
        assert_eq!(s.tier, DangerTier::Extreme);
    }

    #[test]
    fn test_wind_term_saturates() {
        let config = DangerConfig::default();
        let gale = config.raw_score(&WeatherObservation::new(10.0, 100.0, 200.0));
        let storm = config.raw_score(&WeatherObservation::new(10.0, 100.0, 400.0));
        // 40 × 0.2 × 1.2
        assert_relative_eq!(gale, 9.6, epsilon = 1e-4);
        assert_relative_eq!(gale, storm);
    }

    #[test]
    fn test_negative_wind_reads_as_calm() {
        let calm = score(&WeatherObservation::new(25.0, 40.0, 0.0));
        let negative = score(&WeatherObservation::new(25.0, 40.0, -15.0));
        assert_eq!(calm, negative);
    }

    #[test]
    fn test_humidity_out_of_range_is_tolerated() {
        let soaked = score(&WeatherObservation::new(0.0, 180.0, 0.0));
        assert_eq!(soaked.value, 0.0);
        assert_eq!(soaked.tier, DangerTier::Low);

        let impossible = score(&WeatherObservation::new(45.0, -300.0, 90.0));
        assert_eq!(impossible.value, 100.0);
        assert_eq!(impossible.tier, DangerTier::Extreme);
    }

    #[test]
    fn test_non_finite_inputs_stay_in_range() {
        let cases = [
            WeatherObservation::new(f32::NAN, f32::NAN, f32::NAN),
            WeatherObservation::new(f32::INFINITY, 0.0, 0.0),
            WeatherObservation::new(f32::NEG_INFINITY, f32::INFINITY, f32::INFINITY),
        ];
        for obs in cases {
            let s = score(&obs);
            assert!((0.0..=100.0).contains(&s.value), "{obs:?} -> {s:?}");
        }
    }

    #[test]
    fn test_tier_bounds_are_exclusive() {
        let tiers = TierThresholds::default();
        assert_eq!(tiers.classify(20.0), DangerTier::Low);
        assert_eq!(tiers.classify(21.0), DangerTier::Moderate);
        assert_eq!(tiers.classify(40.0), DangerTier::Moderate);
        assert_eq!(tiers.classify(41.0), DangerTier::High);
        assert_eq!(tiers.classify(60.0), DangerTier::High);
        assert_eq!(tiers.classify(61.0), DangerTier::VeryHigh);
        assert_eq!(tiers.classify(80.0), DangerTier::VeryHigh);
        assert_eq!(tiers.classify(81.0), DangerTier::Extreme);
    }

    #[test]
    fn test_hot_dry_multiplier_needs_both_conditions() {
        let config = DangerConfig::default();
        let hot_humid = config.raw_score(&WeatherObservation::new(35.0, 30.0, 0.0));
        // 56×0.5 + 37.5×0.3, no amplification at exactly 30%
        assert_relative_eq!(hot_humid, 39.25, epsilon = 1e-4);

        let hot_dry = config.raw_score(&WeatherObservation::new(35.0, 29.0, 0.0));
        assert_relative_eq!(hot_dry, (56.8 * 0.5 + 37.5 * 0.3) * 1.3, epsilon = 1e-3);
    }

    #[test]
    fn test_tier_presentation() {
        assert_eq!(DangerTier::VeryHigh.to_string(), "Very High");
        assert_eq!(DangerTier::Extreme.color_hex(), "#a855f7");
        assert!(DangerTier::Extreme > DangerTier::High);
        let s = DangerScore {
            value: 42.0,
            tier: DangerTier::High,
        };
        assert_eq!(s.to_string(), "42 (High)");
    }

    #[test]
    fn test_thresholds_validation() {
        assert!(TierThresholds::default().is_ascending());
        let broken = TierThresholds {
            high: 10.0,
            ..TierThresholds::default()
        };
        assert!(!broken.is_ascending());
    }
}
