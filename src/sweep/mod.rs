//! Incremental boundary sweeps.
//!
//! A sweep moves a boundary through a sorted sequence of parameters. Each
//! step only enlarges the connected region, so a pair connected at step `k`
//! stays connected afterwards and the network at step `k` is the network at
//! step `k - 1` plus the edges of batch `k`.
//!
//! Rather than re-testing every pair at every step, each pair's first
//! connecting step is located once: a closed-form join parameter gives a
//! starting guess via binary search over the sorted parameters, which is then
//! settled against the exact boundary test. Pairs are then grouped by step.

mod batches;

pub use batches::{Batch, EdgeBatches};

use crate::error::{Error, Result};
use crate::geometry::{Boundary, BoundaryFamily, InterceptSweep, SweepLine};
use crate::matrix::DistanceMatrix;
use crate::parallel::fill_rows;
use log::{debug, warn};
use std::time::Instant;

/// Translate `line` through each of `offsets` (ascending) and report the
/// pairs gained at each offset.
///
/// Fails with [`Error::InvalidArgument`] before touching the matrix when the
/// offsets are unsorted or non-finite, or when an offset yields an invalid
/// boundary.
pub fn sweep_1d(
    matrix: &DistanceMatrix<'_>,
    offsets: &[f64],
    line: &SweepLine,
    num_threads: usize,
) -> Result<EdgeBatches> {
    let [dx, dy] = line.direction();
    debug!(
        "sweep_1d: {} boundary moving along ({dx:.4}, {dy:.4})",
        line.slope()
    );
    run_sweep(matrix, "offsets", offsets, line, num_threads)
}

/// Sweep an oblique boundary with fixed `y_max` through ascending `x_max`
/// values on a single worker.
pub fn sweep_2d(matrix: &DistanceMatrix<'_>, x_max: &[f64], y_max: f64) -> Result<EdgeBatches> {
    sweep_2d_threaded(matrix, x_max, y_max, 1)
}

/// [`sweep_2d`] partitioned over `num_threads` workers; output is identical.
pub fn sweep_2d_threaded(
    matrix: &DistanceMatrix<'_>,
    x_max: &[f64],
    y_max: f64,
    num_threads: usize,
) -> Result<EdgeBatches> {
    let family = InterceptSweep::new(y_max)?;
    debug!("sweep_2d: oblique boundary with y_max={}", family.y_max());
    run_sweep(matrix, "x_max", x_max, &family, num_threads)
}

fn run_sweep<F: BoundaryFamily>(
    matrix: &DistanceMatrix<'_>,
    label: &str,
    params: &[f64],
    family: &F,
    num_threads: usize,
) -> Result<EdgeBatches> {
    check_sorted(label, params)?;
    let boundaries = params
        .iter()
        .map(|&param| family.boundary_at(param))
        .collect::<Result<Vec<_>>>()?;
    if params.is_empty() {
        warn!("sweep over empty {label} sequence; no edges will be produced");
    }

    let t0 = Instant::now();
    let mut first_steps = vec![None; matrix.rows()];
    fill_rows(matrix, num_threads, &mut first_steps, |p| {
        first_step(p, params, &boundaries, family)
    })?;
    let batches = EdgeBatches::from_first_steps(matrix, &first_steps, params.len());
    debug!(
        "sweep over {} {label}: {} of {} pairs connected, threads={num_threads}, {:.3} ms",
        params.len(),
        batches.len(),
        matrix.rows(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(batches)
}

fn check_sorted(label: &str, values: &[f64]) -> Result<()> {
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::invalid(format!(
            "{label}[{idx}] = {} is not finite",
            values[idx]
        )));
    }
    if let Some(idx) = values.windows(2).position(|w| w[0] > w[1]) {
        return Err(Error::invalid(format!(
            "{label} must be sorted ascending, but {label}[{idx}] = {} > {label}[{}] = {}",
            values[idx],
            idx + 1,
            values[idx + 1]
        )));
    }
    Ok(())
}

/// Index of the first boundary containing `p`, or `None` if even the last
/// one does not. `boundaries` must be nested (each containing the previous).
fn first_step<F: BoundaryFamily>(
    p: [f64; 2],
    params: &[f64],
    boundaries: &[Boundary],
    family: &F,
) -> Option<usize> {
    let last = boundaries.last()?;
    if !last.contains(p) {
        return None;
    }
    let join = family.join_param(p);
    let mut k = params.partition_point(|&v| v < join);
    while k < boundaries.len() && !boundaries[k].contains(p) {
        k += 1;
    }
    while k > 0 && boundaries[k - 1].contains(p) {
        k -= 1;
    }
    Some(k)
}
