use crate::matrix::DistanceMatrix;
use serde::Serialize;

/// Edges gained at each step of a sweep, grouped by step.
///
/// The four public vectors are parallel: entry `e` is the pair stored at
/// matrix row `pairs[e]`, identified by `(rows[e], cols[e])`, which first
/// became connected at step `steps[e]`. Entries are ordered by step and then
/// by matrix row. `rows`/`cols` are sample indices when the matrix declares
/// its sample count, and the matrix row repeated otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeBatches {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub steps: Vec<usize>,
    pub pairs: Vec<usize>,
    #[serde(skip)]
    step_starts: Vec<usize>,
}

/// Borrowed view of the edges added by one sweep step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch<'a> {
    pub step: usize,
    pub rows: &'a [usize],
    pub cols: &'a [usize],
    pub pairs: &'a [usize],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl EdgeBatches {
    /// Group rows by the first step that connects them.
    ///
    /// Counts per step are accumulated first so that every output vector is
    /// allocated once at its final size.
    pub(crate) fn from_first_steps(
        matrix: &DistanceMatrix<'_>,
        first_steps: &[Option<usize>],
        n_steps: usize,
    ) -> Self {
        let mut step_starts = vec![0usize; n_steps + 1];
        for step in first_steps.iter().flatten() {
            step_starts[step + 1] += 1;
        }
        for k in 0..n_steps {
            step_starts[k + 1] += step_starts[k];
        }

        let total = step_starts[n_steps];
        let mut rows = vec![0usize; total];
        let mut cols = vec![0usize; total];
        let mut steps = vec![0usize; total];
        let mut pairs = vec![0usize; total];
        let mut cursor = step_starts[..n_steps].to_vec();
        for (row, step) in first_steps.iter().enumerate() {
            let Some(step) = *step else { continue };
            let at = cursor[step];
            cursor[step] += 1;
            let (i, j) = matrix.pair_of(row);
            rows[at] = i;
            cols[at] = j;
            steps[at] = step;
            pairs[at] = row;
        }

        Self {
            rows,
            cols,
            steps,
            pairs,
            step_starts,
        }
    }

    /// Number of sweep steps, including steps that added nothing.
    pub fn n_steps(&self) -> usize {
        self.step_starts.len().saturating_sub(1)
    }

    /// Total number of edges over all steps.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Edges first connected at `step`. Panics if `step >= n_steps()`.
    pub fn batch(&self, step: usize) -> Batch<'_> {
        let range = self.step_starts[step]..self.step_starts[step + 1];
        Batch {
            step,
            rows: &self.rows[range.clone()],
            cols: &self.cols[range.clone()],
            pairs: &self.pairs[range],
        }
    }

    pub fn batches(&self) -> impl Iterator<Item = Batch<'_>> + '_ {
        (0..self.n_steps()).map(move |step| self.batch(step))
    }

    /// Edges added at each step.
    pub fn step_counts(&self) -> Vec<usize> {
        self.step_starts.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Cumulative membership after applying steps `0..=step` to a matrix of
    /// `n_rows` rows. Steps past the end are clamped to the last one.
    pub fn membership_through(&self, step: usize, n_rows: usize) -> Vec<bool> {
        let mut membership = vec![false; n_rows];
        if self.n_steps() == 0 {
            return membership;
        }
        let end = self.step_starts[step.min(self.n_steps() - 1) + 1];
        for &row in &self.pairs[..end] {
            membership[row] = true;
        }
        membership
    }

    /// The `(row, column, step)` sequences consumed by network construction.
    pub fn into_coo(self) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        (self.rows, self.cols, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_rows_by_step_then_row() {
        let pairs = [[0.0, 0.0]; 6];
        let m = DistanceMatrix::from_pairs(&pairs);
        let first = [Some(2), None, Some(0), Some(2), Some(0), None];
        let batches = EdgeBatches::from_first_steps(&m, &first, 4);

        assert_eq!(batches.n_steps(), 4);
        assert_eq!(batches.pairs, vec![2, 4, 0, 3]);
        assert_eq!(batches.steps, vec![0, 0, 2, 2]);
        assert_eq!(batches.step_counts(), vec![2, 0, 2, 0]);
        assert!(batches.batch(1).is_empty());
        assert_eq!(batches.batch(2).pairs, &[0, 3]);
        assert_eq!(batches.batches().count(), 4);
    }

    #[test]
    fn condensed_rows_map_to_sample_pairs() {
        let pairs = [[0.0, 0.0]; 3];
        let m = DistanceMatrix::from_pairs(&pairs).with_samples(3).unwrap();
        let first = [None, Some(0), Some(1)];
        let (rows, cols, steps) = EdgeBatches::from_first_steps(&m, &first, 2).into_coo();
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(cols, vec![2, 2]);
        assert_eq!(steps, vec![0, 1]);
    }

    #[test]
    fn membership_accumulates_over_steps() {
        let pairs = [[0.0, 0.0]; 4];
        let m = DistanceMatrix::from_pairs(&pairs);
        let first = [Some(1), Some(0), None, Some(1)];
        let batches = EdgeBatches::from_first_steps(&m, &first, 2);
        assert_eq!(
            batches.membership_through(0, 4),
            vec![false, true, false, false]
        );
        assert_eq!(
            batches.membership_through(7, 4),
            vec![true, true, false, true]
        );
    }
}
