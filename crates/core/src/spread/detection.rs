//! Satellite hotspot detection records

use crate::core_types::{GeoPoint, Kelvin};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Detection confidence, collapsed to two tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// High-confidence fire pixel
    High,
    /// Anything not explicitly high (low, nominal, unrecognised)
    Low,
}

impl Confidence {
    /// FIRMS percentage at and above which a detection counts as high
    pub const HIGH_PERCENT: f32 = 80.0;

    /// Normalise a provider token. `high` and `h` in any case are High;
    /// every other token, including garbage, is Low.
    pub fn from_token(token: &str) -> Confidence {
        let token = token.trim();
        if token.eq_ignore_ascii_case("high") || token.eq_ignore_ascii_case("h") {
            Confidence::High
        } else {
            Confidence::Low
        }
    }

    /// Classify a numeric (0-100) confidence
    pub fn from_percent(percent: f32) -> Confidence {
        if percent >= Self::HIGH_PERCENT {
            Confidence::High
        } else {
            Confidence::Low
        }
    }

    /// Parse a FIRMS confidence cell: numeric for MODIS, a letter for VIIRS
    pub fn from_firms(raw: &str) -> Confidence {
        match raw.trim().parse::<f32>() {
            Ok(percent) if percent.is_finite() => Confidence::from_percent(percent),
            _ => Confidence::from_token(raw),
        }
    }

    /// Lowercase token
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Low => "low",
        }
    }
}

impl FromStr for Confidence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Confidence::from_token(s))
    }
}

impl From<&str> for Confidence {
    fn from(s: &str) -> Self {
        Confidence::from_token(s)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Confidence::from_token(&token))
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Satellite platform that produced a detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Satellite {
    /// MODIS on Terra
    Terra,
    /// MODIS on Aqua
    Aqua,
    /// VIIRS (Suomi NPP / NOAA-20)
    Viirs,
    /// Unrecognised platform code, kept verbatim
    Other(String),
}

impl Satellite {
    /// Map a FIRMS platform code (`T`, `A`, `N`)
    pub fn from_code(code: &str) -> Satellite {
        match code.trim() {
            "T" | "Terra" => Satellite::Terra,
            "A" | "Aqua" => Satellite::Aqua,
            "N" | "VIIRS" => Satellite::Viirs,
            other => Satellite::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Satellite::Terra => f.write_str("Terra"),
            Satellite::Aqua => f.write_str("Aqua"),
            Satellite::Viirs => f.write_str("VIIRS"),
            Satellite::Other(code) => write!(f, "MODIS-{code}"),
        }
    }
}

/// A thermal anomaly reported by a fire-detection satellite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotDetection {
    /// Pixel center
    pub location: GeoPoint,
    /// Brightness temperature of the fire pixel
    pub brightness: Kelvin,
    /// Normalised detection confidence
    pub confidence: Confidence,
    /// Acquisition time (UTC)
    pub acquired_at: DateTime<Utc>,
    /// Reporting platform, when known
    #[serde(default)]
    pub satellite: Option<Satellite>,
}

impl HotspotDetection {
    /// Create a detection with no platform information
    pub fn new(
        location: GeoPoint,
        brightness: Kelvin,
        confidence: Confidence,
        acquired_at: DateTime<Utc>,
    ) -> Self {
        HotspotDetection {
            location,
            brightness,
            confidence,
            acquired_at,
            satellite: None,
        }
    }

    /// Attach the reporting platform
    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellite = Some(satellite);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_tokens_are_case_insensitive() {
        assert_eq!(Confidence::from_token("HIGH"), Confidence::High);
        assert_eq!(Confidence::from_token(" High "), Confidence::High);
        assert_eq!(Confidence::from_token("h"), Confidence::High);
        assert_eq!(Confidence::from_token("low"), Confidence::Low);
        assert_eq!(Confidence::from_token("nominal"), Confidence::Low);
        assert_eq!(Confidence::from_token("???"), Confidence::Low);
        assert_eq!("High".parse::<Confidence>(), Ok(Confidence::High));
    }

    #[test]
    fn test_firms_confidence() {
        assert_eq!(Confidence::from_firms("80"), Confidence::High);
        assert_eq!(Confidence::from_firms("79.5"), Confidence::Low);
        assert_eq!(Confidence::from_firms("h"), Confidence::High);
        assert_eq!(Confidence::from_firms("n"), Confidence::Low);
        assert_eq!(Confidence::from_firms("NaN"), Confidence::Low);
    }

    #[test]
    fn test_confidence_serde_normalises() {
        let c: Confidence = serde_json::from_str("\"HiGh\"").unwrap();
        assert_eq!(c, Confidence::High);
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_satellite_codes() {
        assert_eq!(Satellite::from_code("T"), Satellite::Terra);
        assert_eq!(Satellite::from_code("A"), Satellite::Aqua);
        assert_eq!(Satellite::from_code("N"), Satellite::Viirs);
        assert_eq!(Satellite::from_code("1").to_string(), "MODIS-1");
    }
}
