//! Fire Risk & Spread Estimation Engine
//!
//! Deterministic, stateless computations behind a wildfire awareness
//! dashboard:
//!
//! - [`danger`]: 0-100 Fire Weather Danger Score and severity tier from
//!   temperature, humidity and wind
//! - [`grid`]: danger sampled over a lattice around a point of interest, with
//!   per-cell failures tolerated
//! - [`spread`]: six-hour spread radius of a satellite hotspot from its
//!   brightness, confidence and an injected wind perturbation
//! - [`ranking`]: stable top-N extraction for presentation
//! - [`ingest`]: NASA FIRMS CSV parsing, region filtering and de-duplication
//!
//! The engine performs no network I/O. Weather and detections are fetched by
//! the caller and passed in as typed values; randomness (the wind term) is
//! drawn by the caller so identical inputs always give identical outputs.
//!
//! ```
//! use fire_risk_core::{danger, ranking, grid, GeoPoint, GridOffsets, WeatherObservation};
//!
//! let grid = grid::sample_grid(GeoPoint::new(-33.9, 151.2), &GridOffsets::default(), |at| {
//!     if at.lat > -33.75 {
//!         Err("upstream timeout")
//!     } else {
//!         Ok(WeatherObservation::new(36.0, 18.0, 32.0))
//!     }
//! });
//! assert_eq!(grid.len(), 20);
//! let worst = ranking::top_n_by_risk(grid.points(), 3);
//! assert_eq!(worst.len(), 3);
//! assert_eq!(danger::score(&worst[0].observation), worst[0].score);
//! ```

pub mod config;
pub mod core_types;
pub mod danger;
pub mod grid;
pub mod ingest;
pub mod ranking;
pub mod spread;

pub use config::{ConfigError, EngineConfig};
pub use core_types::{
    Celsius, GeoPoint, Kelvin, Kilometers, KilometersPerHour, Percent, WeatherObservation,
};
pub use danger::{DangerConfig, DangerScore, DangerTier, ForecastOutlook, TierThresholds};
pub use grid::{GridConfig, GridOffsets, GridPoint, RiskGrid};
pub use ingest::{deduplicate, parse_firms_csv, FirmsBatch, IngestError, RegionBounds};
pub use ranking::{top_n, top_n_by_risk, RiskKeyed};
pub use spread::{
    AssessedHotspot, Confidence, HotspotDetection, Satellite, SpreadComponents, SpreadConfig,
    SpreadPrediction,
};
