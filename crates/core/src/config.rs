//! Engine configuration
//!
//! All heuristic constants (danger weights and thresholds, grid offsets,
//! spread steps) are configuration defaults rather than physical law. An
//! [`EngineConfig`] bundles them and can be loaded from JSON; any field left
//! out falls back to its default.
//!
//! ```
//! use fire_risk_core::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{ "spread": { "low_confidence_km": -1.0 } }"#)
//!     .expect("valid config");
//! assert_eq!(config.spread.low_confidence_km, -1.0);
//! assert_eq!(config.spread.base_rate_km, 3.0);
//! ```

use crate::core_types::{GeoPoint, WeatherObservation};
use crate::danger::{DangerConfig, DangerScore};
use crate::grid::{sample_grid_par_with, sample_grid_with, GridConfig, RiskGrid};
use crate::spread::{HotspotDetection, SpreadConfig, SpreadPrediction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Danger scoring heuristic
    pub danger: DangerConfig,
    /// Regional grid lattice
    pub grid: GridConfig,
    /// Spread estimation heuristic
    pub spread: SpreadConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or fails [`EngineConfig::validate`]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed(e.to_string()))
    }

    /// Check the values the engine relies on
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.danger.tiers.is_ascending() {
            return Err(ConfigError::Invalid(
                "danger.tiers must be finite and strictly increasing".to_string(),
            ));
        }
        if self.grid.offsets.is_empty() {
            return Err(ConfigError::Invalid("grid.offsets must not be empty".to_string()));
        }
        if !self.grid.offsets.is_finite() {
            return Err(ConfigError::Invalid("grid.offsets must be finite".to_string()));
        }
        if self.spread.moderate_brightness_k > self.spread.intense_brightness_k {
            return Err(ConfigError::Invalid(
                "spread.moderate_brightness_k must not exceed spread.intense_brightness_k"
                    .to_string(),
            ));
        }
        let bound = self.spread.wind_perturbation_bound_km;
        if !(bound.is_finite() && bound >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spread.wind_perturbation_bound_km must be finite and >= 0, got {bound}"
            )));
        }
        Ok(())
    }

    /// Score an observation
    pub fn score(&self, observation: &WeatherObservation) -> DangerScore {
        self.danger.score(observation)
    }

    /// Sample the configured lattice around `center` sequentially
    pub fn sample_grid<F, E>(&self, center: GeoPoint, fetch: F) -> RiskGrid
    where
        F: FnMut(GeoPoint) -> Result<WeatherObservation, E>,
        E: fmt::Display,
    {
        sample_grid_with(&self.danger, center, &self.grid.offsets, fetch)
    }

    /// Sample the configured lattice around `center` on the rayon pool
    pub fn sample_grid_par<F, E>(&self, center: GeoPoint, fetch: F) -> RiskGrid
    where
        F: Fn(GeoPoint) -> Result<WeatherObservation, E> + Sync,
        E: fmt::Display,
    {
        sample_grid_par_with(&self.danger, center, &self.grid.offsets, fetch)
    }

    /// Estimate the spread of a detection
    pub fn estimate_spread(
        &self,
        detection: &HotspotDetection,
        wind_perturbation_km: f32,
    ) -> SpreadPrediction {
        self.spread.estimate(detection, wind_perturbation_km)
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read file
    LoadFailed(String),
    /// Failed to parse contents
    ParseFailed(String),
    /// Failed to serialize
    SerializeFailed(String),
    /// Parsed but out of bounds
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            ConfigError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
