//! Danger outlook over an hourly forecast series

use super::{DangerConfig, DangerScore};
use crate::core_types::WeatherObservation;
use serde::{Deserialize, Serialize};

/// Per-period danger scores for a forecast, with the worst period flagged
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastOutlook {
    /// One score per input period, in input order
    pub scores: Vec<DangerScore>,
    /// Index of the highest score; earliest period wins ties. `None` when empty.
    pub peak: Option<usize>,
}

impl ForecastOutlook {
    /// Score every period of a forecast series
    pub fn from_series(config: &DangerConfig, series: &[WeatherObservation]) -> Self {
        let scores: Vec<DangerScore> = series.iter().map(|obs| config.score(obs)).collect();

        let peak = scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<usize>, (idx, s)| match best {
                Some(b) if scores[b].value >= s.value => Some(b),
                _ => Some(idx),
            });

        ForecastOutlook { scores, peak }
    }

    /// The worst score in the outlook. `None` if `peak` is unset or out of range.
    pub fn peak_score(&self) -> Option<DangerScore> {
        self.peak.and_then(|idx| self.scores.get(idx).copied())
    }
}
