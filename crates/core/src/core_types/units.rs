//! Semantic unit types for fire-weather quantities
//!
//! Newtype wrappers keep temperatures, humidities, wind speeds and distances
//! from being mixed up when observations cross the engine boundary. Provider
//! payloads must already be in these units (°C, %, km/h, K, km); conversion is
//! the caller's job.
//!
//! # Design
//! - All quantities are `f32`; the heuristics here never need more precision
//! - Total ordering via `Ord` (`total_cmp`, NaN sorts above every value)
//! - `Deref` to the raw float for arithmetic inside the scoring code
//! - Constructors never panic except `Kilometers::new`, which rejects negatives
//!
//! # Usage
//! ```
//! use fire_risk_core::core_types::units::{Celsius, KilometersPerHour};
//!
//! let t = Celsius::new(-5.0);
//! assert_eq!(*t, -5.0);
//!
//! let gust = KilometersPerHour::new(-3.0);
//! assert_eq!(*gust.non_negative(), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Implements the shared ordering, deref and conversion plumbing for an
/// `f32` newtype.
macro_rules! scalar_unit {
    ($name:ident) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f32;
            #[inline]
            fn deref(&self) -> &f32 {
                &self.0
            }
        }

        impl From<$name> for f32 {
            fn from(v: $name) -> f32 {
                v.0
            }
        }

        impl $name {
            /// Get the raw f32 value
            #[inline]
            #[must_use]
            pub fn value(self) -> f32 {
                self.0
            }
        }
    };
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Air temperature in degrees Celsius
///
/// Any real value is accepted, including sub-zero readings; the danger
/// heuristic simply contributes nothing below its heat base.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f32);

scalar_unit!(Celsius);

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Celsius(value)
    }
}

impl From<f32> for Celsius {
    fn from(v: f32) -> Self {
        Celsius(v)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Brightness temperature in Kelvin, as reported by satellite thermal bands
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kelvin(f32);

scalar_unit!(Kelvin);

impl Kelvin {
    /// Create a new Kelvin temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Kelvin(value)
    }
}

impl From<f32> for Kelvin {
    fn from(v: f32) -> Self {
        Kelvin(v)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} K", self.0)
    }
}

// ============================================================================
// HUMIDITY
// ============================================================================

/// A percentage, nominally 0-100
///
/// Out-of-range values are stored as given so that the caller's reading is
/// preserved; the danger heuristic's `max(0, ..)` guards bound their effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f32);

scalar_unit!(Percent);

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Percent(value)
    }
}

impl From<f32> for Percent {
    fn from(v: f32) -> Self {
        Percent(v)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// VELOCITY / DISTANCE
// ============================================================================

/// Wind speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilometersPerHour(f32);

scalar_unit!(KilometersPerHour);

impl KilometersPerHour {
    /// Create a new `KilometersPerHour` value
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        KilometersPerHour(value)
    }

    /// Negative (and NaN) speeds read as calm
    #[inline]
    #[must_use]
    pub fn non_negative(self) -> KilometersPerHour {
        KilometersPerHour(self.0.max(0.0))
    }
}

impl From<f32> for KilometersPerHour {
    fn from(v: f32) -> Self {
        KilometersPerHour(v)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kilometers(f32);

scalar_unit!(Kilometers);

impl Kilometers {
    /// Create a new Kilometers value.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= 0.0,
            "Kilometers::new: negative distance is invalid"
        );
        Kilometers(value)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}
