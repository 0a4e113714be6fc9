//! Grid sampling with a partial-result policy
//!
//! Every lattice cell is fetched and scored independently. A cell whose fetch
//! fails is dropped from the result (and counted) instead of failing the grid,
//! so callers must accept grids shorter than `offsets.len()²`.

use super::offsets::GridOffsets;
use crate::core_types::{GeoPoint, WeatherObservation};
use crate::danger::{DangerConfig, DangerScore};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// One scored lattice cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Index into the latitude offsets
    pub row: usize,
    /// Index into the longitude offsets
    pub col: usize,
    /// Sample position
    pub location: GeoPoint,
    /// Weather reported for the position
    pub observation: WeatherObservation,
    /// Danger score of `observation`
    pub score: DangerScore,
}

/// Scored lattice around a point of interest
///
/// Points are in generation order (row-major) with unavailable cells removed.
/// Rank with [`crate::ranking`] rather than relying on this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskGrid {
    center: GeoPoint,
    dimension: usize,
    center_cell: Option<usize>,
    points: Vec<GridPoint>,
    unavailable: usize,
}

impl RiskGrid {
    /// Query position the lattice is built around
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Available points in generation order
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Consume the grid, keeping its points
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }

    /// Number of available points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no cell could be scored
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cells requested (`dimension²`)
    pub fn requested(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Number of cells dropped because their weather was unavailable
    pub fn unavailable(&self) -> usize {
        self.unavailable
    }

    /// True when every requested cell was scored
    pub fn is_complete(&self) -> bool {
        self.unavailable == 0
    }

    /// The `(0, 0)` offset cell, if the offsets are centred and it was available
    pub fn center_point(&self) -> Option<&GridPoint> {
        let mid = self.center_cell?;
        self.points.iter().find(|p| p.row == mid && p.col == mid)
    }

    /// Single reading for the area: the center cell, else the first available cell
    pub fn representative(&self) -> Option<&GridPoint> {
        self.center_point().or_else(|| self.points.first())
    }

    /// Highest-scoring cell; the first generated wins ties
    pub fn peak(&self) -> Option<&GridPoint> {
        self.points.iter().fold(None, |best: Option<&GridPoint>, p| match best {
            Some(b) if b.score.value >= p.score.value => Some(b),
            _ => Some(p),
        })
    }

    /// Mean score over the available cells
    pub fn mean_score(&self) -> Option<f32> {
        if self.points.is_empty() {
            return None;
        }
        let total: f32 = self.points.iter().map(|p| p.score.value).sum();
        Some(total / self.points.len() as f32)
    }

    fn assemble(center: GeoPoint, offsets: &GridOffsets, cells: Vec<Option<GridPoint>>) -> Self {
        let requested = cells.len();
        let points: Vec<GridPoint> = cells.into_iter().flatten().collect();
        let unavailable = requested - points.len();

        if unavailable * 2 > requested {
            warn!(
                "Risk grid at {center}: {unavailable} of {requested} cells unavailable"
            );
        } else {
            debug!(
                "Risk grid at {center}: {} of {requested} cells scored",
                points.len()
            );
        }

        RiskGrid {
            center,
            dimension: offsets.len(),
            center_cell: offsets.center_position(),
            points,
            unavailable,
        }
    }
}

/// Row, column and position of flattened cell `idx`
fn cell_at(center: GeoPoint, offsets: &[f64], idx: usize) -> (usize, usize, GeoPoint) {
    let n = offsets.len();
    let (row, col) = (idx / n, idx % n);
    (row, col, center.offset(offsets[row], offsets[col]))
}

/// Score one cell, or log and drop it when its weather is unavailable
fn score_cell<E: fmt::Display>(
    danger: &DangerConfig,
    (row, col, location): (usize, usize, GeoPoint),
    fetched: Result<WeatherObservation, E>,
) -> Option<GridPoint> {
    match fetched {
        Ok(observation) => Some(GridPoint {
            row,
            col,
            location,
            observation,
            score: danger.score(&observation),
        }),
        Err(e) => {
            debug!("Grid cell ({row}, {col}) at {location} unavailable: {e}");
            None
        }
    }
}

/// Sample the lattice sequentially with an explicit danger configuration
pub fn sample_grid_with<F, E>(
    danger: &DangerConfig,
    center: GeoPoint,
    offsets: &GridOffsets,
    mut fetch: F,
) -> RiskGrid
where
    F: FnMut(GeoPoint) -> Result<WeatherObservation, E>,
    E: fmt::Display,
{
    let cells = (0..offsets.cell_count())
        .map(|idx| {
            let cell = cell_at(center, offsets.as_slice(), idx);
            score_cell(danger, cell, fetch(cell.2))
        })
        .collect();
    RiskGrid::assemble(center, offsets, cells)
}

/// Sample the lattice, fetching cells concurrently on the rayon pool.
///
/// Produces the same grid as [`sample_grid_with`] for a deterministic fetch;
/// per-cell latency or failure never blocks or discards other cells.
pub fn sample_grid_par_with<F, E>(
    danger: &DangerConfig,
    center: GeoPoint,
    offsets: &GridOffsets,
    fetch: F,
) -> RiskGrid
where
    F: Fn(GeoPoint) -> Result<WeatherObservation, E> + Sync,
    E: fmt::Display,
{
    let cells = (0..offsets.cell_count())
        .into_par_iter()
        .map(|idx| {
            let cell = cell_at(center, offsets.as_slice(), idx);
            score_cell(danger, cell, fetch(cell.2))
        })
        .collect();
    RiskGrid::assemble(center, offsets, cells)
}

/// Sample the lattice sequentially with the default danger heuristic
///
/// # Example
///
/// ```
/// use fire_risk_core::{grid, GeoPoint, GridOffsets, WeatherObservation};
///
/// let offsets = GridOffsets::default();
/// let grid = grid::sample_grid(GeoPoint::new(31.79, -7.09), &offsets, |_at| {
///     Ok::<_, String>(WeatherObservation::new(32.0, 20.0, 18.0))
/// });
/// assert_eq!(grid.len(), 25);
/// assert_eq!(grid.center_point().map(|p| (p.row, p.col)), Some((2, 2)));
/// ```
pub fn sample_grid<F, E>(center: GeoPoint, offsets: &GridOffsets, fetch: F) -> RiskGrid
where
    F: FnMut(GeoPoint) -> Result<WeatherObservation, E>,
    E: fmt::Display,
{
    sample_grid_with(&DangerConfig::default(), center, offsets, fetch)
}

/// Parallel [`sample_grid`] with the default danger heuristic
pub fn sample_grid_par<F, E>(center: GeoPoint, offsets: &GridOffsets, fetch: F) -> RiskGrid
where
    F: Fn(GeoPoint) -> Result<WeatherObservation, E> + Sync,
    E: fmt::Display,
{
    sample_grid_par_with(&DangerConfig::default(), center, offsets, fetch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(_at: GeoPoint) -> Result<WeatherObservation, String> {
        Ok(WeatherObservation::new(25.0, 40.0, 10.0))
    }

    #[test]
    fn test_row_major_generation_order() {
        let offsets = GridOffsets::new(vec![-1.0, 0.0, 1.0]);
        let grid = sample_grid(GeoPoint::new(10.0, 20.0), &offsets, flat);
        let cells: Vec<(usize, usize)> = grid.points().iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(grid.points()[1].location, GeoPoint::new(9.0, 20.0));
        assert_eq!(grid.points()[3].location, GeoPoint::new(10.0, 19.0));
    }

    #[test]
    fn test_empty_offsets_yield_empty_grid() {
        let grid = sample_grid(GeoPoint::default(), &GridOffsets::new(Vec::new()), flat);
        assert!(grid.is_empty());
        assert_eq!(grid.requested(), 0);
        assert!(grid.representative().is_none());
        assert_eq!(grid.mean_score(), None);
    }

    #[test]
    fn test_representative_falls_back_to_first_cell() {
        let center = GeoPoint::new(0.0, 0.0);
        let grid = sample_grid(center, &GridOffsets::default(), |at: GeoPoint| {
            if at == center {
                Err("timeout".to_string())
            } else {
                flat(at)
            }
        });
        assert_eq!(grid.len(), 24);
        assert!(grid.center_point().is_none());
        let rep = grid.representative().map(|p| (p.row, p.col));
        assert_eq!(rep, Some((0, 0)));
    }

    #[test]
    fn test_peak_prefers_first_on_ties() {
        let grid = sample_grid(GeoPoint::default(), &GridOffsets::default(), flat);
        assert_eq!(grid.peak().map(|p| (p.row, p.col)), Some((0, 0)));
        let mean = grid.mean_score().unwrap_or_default();
        assert_eq!(mean, grid.points()[0].score.value);
    }
}
