//! Regional risk grid
//!
//! Samples the danger score over a square lattice of coordinates around a
//! point of interest. Weather for each cell comes from a caller-supplied
//! fetch function; the engine itself performs no I/O.

pub mod offsets;
pub mod sampler;

pub use offsets::{GridConfig, GridOffsets};
pub use sampler::{
    sample_grid, sample_grid_par, sample_grid_par_with, sample_grid_with, GridPoint, RiskGrid,
};
