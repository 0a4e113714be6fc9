//! Point weather observations fed to the danger scorer.

use crate::core_types::units::{Celsius, KilometersPerHour, Percent};
use serde::{Deserialize, Serialize};

/// Surface weather at a single location and time
///
/// Provider payloads (e.g. an hourly forecast API) must be mapped into this
/// shape in °C, % and km/h before reaching the engine. Values are kept as
/// given; the scorer tolerates out-of-range readings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (2 m)
    pub temperature: Celsius,
    /// Relative humidity (2 m), nominally 0-100
    pub humidity: Percent,
    /// Wind speed (10 m), nominally >= 0
    pub wind_speed: KilometersPerHour,
}

impl WeatherObservation {
    /// Create an observation from raw readings in °C, % and km/h
    #[must_use]
    pub fn new(temperature_c: f32, humidity_pct: f32, wind_kph: f32) -> Self {
        WeatherObservation {
            temperature: Celsius::new(temperature_c),
            humidity: Percent::new(humidity_pct),
            wind_speed: KilometersPerHour::new(wind_kph),
        }
    }
}
