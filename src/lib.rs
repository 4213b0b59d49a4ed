#![doc = include_str!("../README.md")]

// Core operations
pub mod assign;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod pairs;
pub mod sweep;

// Tool support: configuration, file I/O and timing reports.
pub mod config;
pub mod diagnostics;
pub mod io;
pub mod operation;

mod parallel;

// --- High-level re-exports -------------------------------------------------

pub use crate::assign::{assign, assign_sides};
pub use crate::error::{Error, Result};
pub use crate::geometry::{Boundary, BoundaryFamily, InterceptSweep, Side, Slope, SweepLine};
pub use crate::matrix::DistanceMatrix;
pub use crate::sweep::{sweep_1d, sweep_2d, sweep_2d_threaded, Batch, EdgeBatches};

/// Small prelude for quick experiments.
///
/// ```
/// use boundary_sweep::prelude::*;
///
/// let pairs = [[0.1, 0.1], [0.5, 0.5], [0.9, 0.9]];
/// let matrix = DistanceMatrix::from_pairs(&pairs);
/// let line = SweepLine::new(Slope::Oblique, 0.1, 0.1, 1.0, 1.0).unwrap();
/// let edges = sweep_1d(&matrix, &[0.0, 0.8, 1.6], &line, 2).unwrap();
/// assert_eq!(edges.steps, vec![0, 1, 2]);
/// ```
pub mod prelude {
    pub use crate::{
        assign, sweep_1d, sweep_2d, DistanceMatrix, EdgeBatches, Error, Slope, SweepLine,
    };
}
