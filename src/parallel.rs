//! Static row partitioning shared by every pass over the distance matrix.
//!
//! Rows are split into `num_threads` contiguous ranges of equal length (the
//! last one may be shorter). Each range writes only its own slice of the
//! output, so the only synchronisation is the final join.

use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, PAIR_WIDTH};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use rayon::ThreadPool;
#[cfg(feature = "parallel")]
use std::collections::HashMap;
#[cfg(feature = "parallel")]
use std::sync::{Arc, Mutex, OnceLock};

/// Worker pools keyed by thread count, built on first use and kept for the
/// life of the process.
#[cfg(feature = "parallel")]
fn pool_for(num_threads: usize) -> Result<Arc<ThreadPool>> {
    static POOLS: OnceLock<Mutex<HashMap<usize, Arc<ThreadPool>>>> = OnceLock::new();
    let mut pools = POOLS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(pool) = pools.get(&num_threads) {
        return Ok(Arc::clone(pool));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;
    log::debug!("built worker pool with {num_threads} threads");
    let pool = Arc::new(pool);
    pools.insert(num_threads, Arc::clone(&pool));
    Ok(pool)
}

/// Rows per partition for `rows` rows over `num_threads` workers.
#[inline]
pub(crate) fn chunk_len(rows: usize, num_threads: usize) -> usize {
    rows.div_ceil(num_threads.max(1)).max(1)
}

/// Evaluate `f` on every row of `matrix`, writing the result for row `i` into
/// `out[i]`.
///
/// The output does not depend on `num_threads`; only wall-clock time does.
pub(crate) fn fill_rows<T, F>(
    matrix: &DistanceMatrix<'_>,
    num_threads: usize,
    out: &mut [T],
    f: F,
) -> Result<()>
where
    T: Send,
    F: Fn([f64; 2]) -> T + Sync,
{
    if num_threads == 0 {
        return Err(Error::invalid("num_threads must be at least 1"));
    }
    if out.len() != matrix.rows() {
        return Err(Error::invalid(format!(
            "output buffer holds {} rows, matrix has {}",
            out.len(),
            matrix.rows()
        )));
    }
    if out.is_empty() {
        return Ok(());
    }

    let chunk = chunk_len(out.len(), num_threads);
    let data = matrix.as_slice();

    #[cfg(feature = "parallel")]
    {
        if num_threads > 1 && out.len() > chunk {
            let pool = pool_for(num_threads)?;
            pool.install(|| {
                out.par_chunks_mut(chunk)
                    .zip(data.par_chunks(chunk * PAIR_WIDTH))
                    .for_each(|(dst, src)| fill_chunk(dst, src, &f));
            });
            return Ok(());
        }
    }

    out.chunks_mut(chunk)
        .zip(data.chunks(chunk * PAIR_WIDTH))
        .for_each(|(dst, src)| fill_chunk(dst, src, &f));
    Ok(())
}

#[inline]
fn fill_chunk<T, F>(dst: &mut [T], src: &[f64], f: &F)
where
    F: Fn([f64; 2]) -> T,
{
    for (slot, row) in dst.iter_mut().zip(src.chunks_exact(PAIR_WIDTH)) {
        *slot = f([row[0], row[1]]);
    }
}
