//! NASA FIRMS active-fire CSV parsing
//!
//! MODIS and VIIRS exports share the columns used here (`latitude`,
//! `longitude`, `acq_date`, `acq_time`, `confidence`, `satellite`); VIIRS
//! names its brightness column `bright_ti4`. Rows that fail to parse are
//! skipped and counted rather than failing the batch.

use super::region::RegionBounds;
use super::IngestError;
use crate::core_types::{GeoPoint, Kelvin};
use crate::spread::{Confidence, HotspotDetection, Satellite};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Brightness assumed when a row has none (K)
const DEFAULT_BRIGHTNESS_K: f32 = 300.0;

/// Columns without which no detection can be built
const REQUIRED_COLUMNS: [&str; 2] = ["latitude", "longitude"];

/// One FIRMS row, as far as the engine cares
#[derive(Debug, Deserialize)]
struct FirmsRow {
    latitude: f64,
    longitude: f64,
    #[serde(default, alias = "bright_ti4")]
    brightness: Option<f32>,
    #[serde(default)]
    acq_date: Option<String>,
    #[serde(default)]
    acq_time: Option<String>,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    satellite: Option<String>,
}

/// Result of parsing one feed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FirmsBatch {
    /// Detections inside the region, in file order
    pub detections: Vec<HotspotDetection>,
    /// Rows dropped because they were short or unparseable
    pub skipped_rows: usize,
    /// Well-formed rows outside the region
    pub out_of_region: usize,
}

/// Parse a FIRMS CSV export.
///
/// Rows without a usable `acq_date`/`acq_time` are stamped with
/// `received_at`. Missing confidence is treated as nominal (Low).
///
/// # Errors
///
/// Returns [`IngestError`] if the header row cannot be read or lacks the
/// `latitude`/`longitude` columns. Empty input yields an empty batch.
pub fn parse_firms_csv(
    text: &str,
    region: &RegionBounds,
    received_at: DateTime<Utc>,
) -> Result<FirmsBatch, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::HeaderUnreadable(e.to_string()))?
        .clone();

    let mut batch = FirmsBatch::default();
    if headers.is_empty() {
        return Ok(batch);
    }
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn(column));
        }
    }

    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping FIRMS row {}: {e}", line + 2);
                batch.skipped_rows += 1;
                continue;
            }
        };
        if record.len() < headers.len() {
            debug!("Skipping short FIRMS row {}", line + 2);
            batch.skipped_rows += 1;
            continue;
        }
        let row: FirmsRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping malformed FIRMS row {}: {e}", line + 2);
                batch.skipped_rows += 1;
                continue;
            }
        };

        let location = GeoPoint::new(row.latitude, row.longitude);
        if !region.contains(location) {
            batch.out_of_region += 1;
            continue;
        }

        let acquired_at = acquisition_time(row.acq_date.as_deref(), row.acq_time.as_deref())
            .unwrap_or(received_at);
        let confidence = row
            .confidence
            .as_deref()
            .map_or(Confidence::Low, Confidence::from_firms);

        let mut detection = HotspotDetection::new(
            location,
            Kelvin::new(row.brightness.unwrap_or(DEFAULT_BRIGHTNESS_K)),
            confidence,
            acquired_at,
        );
        if let Some(code) = row.satellite.as_deref().filter(|c| !c.is_empty()) {
            detection = detection.with_satellite(Satellite::from_code(code));
        }
        batch.detections.push(detection);
    }

    debug!(
        "Parsed {} FIRMS detections ({} skipped, {} out of region)",
        batch.detections.len(),
        batch.skipped_rows,
        batch.out_of_region
    );
    Ok(batch)
}

/// Combine `YYYY-MM-DD` and zero-padded `HHMM` (UTC)
fn acquisition_time(date: Option<&str>, time: Option<&str>) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()?;
    let time = time?;
    if time.is_empty() || time.len() > 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{time:0>4}");
    let hours: u32 = padded[..2].parse().ok()?;
    let minutes: u32 = padded[2..].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hours, minutes, 0)?;
    Some(date.and_time(time).and_utc())
}
