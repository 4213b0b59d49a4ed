//! Single-boundary classification of every pair.

use crate::error::Result;
use crate::geometry::{Boundary, Side, Slope};
use crate::matrix::DistanceMatrix;
use crate::parallel::fill_rows;
use log::debug;
use std::time::Instant;

/// Membership of every row against the boundary `(slope, x_max, y_max)`:
/// `true` when the pair lies on the origin side of the line or on it.
///
/// The output has one entry per row, in row order, and is identical for any
/// `num_threads >= 1`.
pub fn assign(
    matrix: &DistanceMatrix<'_>,
    slope: Slope,
    x_max: f64,
    y_max: f64,
    num_threads: usize,
) -> Result<Vec<bool>> {
    let boundary = Boundary::new(slope, x_max, y_max)?;
    let t0 = Instant::now();
    let mut membership = vec![false; matrix.rows()];
    fill_rows(matrix, num_threads, &mut membership, |p| boundary.contains(p))?;
    debug!(
        "assign: {} rows against {slope} boundary (x_max={x_max}, y_max={y_max}), {} inside, threads={num_threads}, {:.3} ms",
        membership.len(),
        membership.iter().filter(|&&inside| inside).count(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(membership)
}

/// Three-way variant of [`assign`] that distinguishes pairs lying exactly on
/// the boundary. [`Side::as_f32`] gives the `-1 / 0 / 1` encoding.
pub fn assign_sides(
    matrix: &DistanceMatrix<'_>,
    slope: Slope,
    x_max: f64,
    y_max: f64,
    num_threads: usize,
) -> Result<Vec<Side>> {
    let boundary = Boundary::new(slope, x_max, y_max)?;
    let mut sides = vec![Side::Outside; matrix.rows()];
    fill_rows(matrix, num_threads, &mut sides, |p| boundary.side(p))?;
    debug!(
        "assign_sides: {} rows against {slope} boundary, {} connected",
        sides.len(),
        sides.iter().filter(|side| side.is_connected()).count()
    );
    Ok(sides)
}
