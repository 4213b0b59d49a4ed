/// Deterministic pseudo-random pairs in `[0, scale)^2`, sized as the condensed
/// matrix of `samples` samples.
pub fn condensed_pairs(samples: usize, scale: f64, seed: u64) -> Vec<[f64; 2]> {
    let rows = samples * samples.saturating_sub(1) / 2;
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..rows).map(|_| [next() * scale, next() * scale]).collect()
}

/// Points on a regular grid, including exact multiples that sit on sweep
/// boundaries.
pub fn grid_pairs(steps: usize, spacing: f64) -> Vec<[f64; 2]> {
    let mut pairs = Vec::with_capacity(steps * steps);
    for i in 0..steps {
        for j in 0..steps {
            pairs.push([i as f64 * spacing, j as f64 * spacing]);
        }
    }
    pairs
}
