//! Condensed pair enumeration.
//!
//! A condensed distance matrix over `n` samples stores one row per unordered
//! pair `(i, j)` with `i < j`, enumerated row-major over the upper triangle:
//! `(0,1), (0,2), .., (0,n-1), (1,2), ..`. These helpers map between the row
//! index `k` and the sample indices.

/// Number of pairs in a condensed matrix over `n` samples.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Returns the sample count `n` such that `n (n - 1) / 2 == rows`, if any.
///
/// Zero rows map to `Some(0)`; a single sample and zero samples both have no
/// pairs and the smaller answer is reported.
pub fn samples_for_rows(rows: usize) -> Option<usize> {
    if rows == 0 {
        return Some(0);
    }
    let estimate = 0.5 * (1.0 + (1.0 + 8.0 * rows as f64).sqrt());
    let guess = estimate.round() as usize;
    // float estimate can be off by one for very large row counts
    (guess.saturating_sub(1)..=guess + 1).find(|&n| pair_count(n) == rows)
}

/// Row index of pair `(i, j)`, `i < j < n`, in the condensed enumeration.
#[inline]
pub fn square_to_condensed(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n);
    pair_count(n) - pair_count(n - i) + (j - i - 1)
}

/// Inverse of [`square_to_condensed`]: the sample pair `(i, j)` stored at row
/// `k` of a condensed matrix over `n` samples.
pub fn condensed_to_square(k: usize, n: usize) -> (usize, usize) {
    debug_assert!(k < pair_count(n));
    let total = pair_count(n);
    // Pairs remaining from row i onwards form a smaller triangle; solve for it
    // in floating point and then correct with exact integer arithmetic.
    let remaining = (total - k) as f64;
    let m_est = (0.5 * (1.0 + (1.0 + 8.0 * remaining).sqrt())).ceil() as usize;
    let mut i = n.saturating_sub(m_est.max(1));
    while i > 0 && row_start(i, n) > k {
        i -= 1;
    }
    while i + 1 < n && row_start(i + 1, n) <= k {
        i += 1;
    }
    let j = k - row_start(i, n) + i + 1;
    (i, j)
}

#[inline]
fn row_start(i: usize, n: usize) -> usize {
    pair_count(n) - pair_count(n - i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_for_rows_recognises_triangular_counts() {
        assert_eq!(samples_for_rows(0), Some(0));
        assert_eq!(samples_for_rows(1), Some(2));
        assert_eq!(samples_for_rows(3), Some(3));
        assert_eq!(samples_for_rows(6), Some(4));
        assert_eq!(samples_for_rows(4950), Some(100));
        assert_eq!(samples_for_rows(2), None);
        assert_eq!(samples_for_rows(7), None);
    }

    #[test]
    fn enumeration_matches_nested_loops() {
        let n = 7;
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                assert_eq!(square_to_condensed(i, j, n), k);
                assert_eq!(condensed_to_square(k, n), (i, j));
                k += 1;
            }
        }
        assert_eq!(k, pair_count(n));
    }

    #[test]
    fn condensed_to_square_handles_large_matrices() {
        let n = 100_000usize;
        let last = pair_count(n) - 1;
        assert_eq!(condensed_to_square(last, n), (n - 2, n - 1));
        assert_eq!(condensed_to_square(0, n), (0, 1));
        assert_eq!(condensed_to_square(n - 1, n), (1, 2));
    }
}
