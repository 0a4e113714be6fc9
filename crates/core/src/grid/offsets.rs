//! Angular offsets that define the sampling lattice

use serde::{Deserialize, Serialize};

/// Ordered angular deltas (degrees) applied to both latitude and longitude.
///
/// The lattice is the Cartesian product `offsets × offsets`, generated
/// row-major with latitude offsets outer and longitude offsets inner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridOffsets(Vec<f64>);

impl GridOffsets {
    /// Wrap an explicit list of offsets
    pub fn new(offsets: Vec<f64>) -> Self {
        GridOffsets(offsets)
    }

    /// Symmetric offsets `-k·spacing ..= k·spacing`, giving `2k + 1` values
    /// with zero in the middle.
    pub fn symmetric(half_steps: usize, spacing: f64) -> Self {
        let k = half_steps as i64;
        GridOffsets((-k..=k).map(|i| i as f64 * spacing).collect())
    }

    /// Offsets as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of offsets (lattice side length)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no offsets
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of lattice cells, `len²`
    pub fn cell_count(&self) -> usize {
        self.0.len() * self.0.len()
    }

    /// Position of the zero offset, if the list has odd length and is
    /// centred on zero
    pub fn center_position(&self) -> Option<usize> {
        let n = self.0.len();
        if n % 2 == 1 && self.0[n / 2] == 0.0 {
            Some(n / 2)
        } else {
            None
        }
    }

    /// Flattened row-major index of the `(0, 0)` cell: `N·(N/2) + N/2`
    pub fn center_index(&self) -> Option<usize> {
        self.center_position().map(|mid| self.0.len() * mid + mid)
    }

    /// True when every offset is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|o| o.is_finite())
    }
}

impl Default for GridOffsets {
    /// ±0.2° in 0.1° steps, a 5×5 lattice
    fn default() -> Self {
        GridOffsets::symmetric(2, 0.1)
    }
}

impl From<Vec<f64>> for GridOffsets {
    fn from(offsets: Vec<f64>) -> Self {
        GridOffsets(offsets)
    }
}

/// Regional sampling configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Lattice offsets in degrees
    pub offsets: GridOffsets,
}
