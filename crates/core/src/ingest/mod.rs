//! Ingestion of satellite active-fire feeds
//!
//! Turns NASA FIRMS CSV text (already downloaded by the caller) into
//! [`HotspotDetection`](crate::spread::HotspotDetection) records, filtered to
//! a region and de-duplicated across sensors.

pub mod dedup;
pub mod firms;
pub mod region;

pub use dedup::{deduplicate, DEFAULT_DEDUP_TOLERANCE_DEG};
pub use firms::{parse_firms_csv, FirmsBatch};
pub use region::RegionBounds;

/// Errors that can occur while ingesting a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The header row could not be read
    HeaderUnreadable(String),
    /// A required column is absent from the header
    MissingColumn(&'static str),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::HeaderUnreadable(msg) => write!(f, "Failed to read header: {msg}"),
            IngestError::MissingColumn(column) => write!(f, "Missing required column '{column}'"),
        }
    }
}

impl std::error::Error for IngestError {}
