//! Borrowed view over a dense two-column distance matrix.

use crate::error::{Error, Result};
use crate::pairs::{condensed_to_square, pair_count, samples_for_rows};

/// Number of coordinates per pair: core and accessory distance.
pub const PAIR_WIDTH: usize = 2;

/// Read-only, row-major `rows x 2` table of pair coordinates.
///
/// Rows are never reordered. When the sample count is known the rows are
/// assumed to follow the condensed enumeration of [`crate::pairs`], which lets
/// sweep results report sample indices instead of raw row indices.
#[derive(Clone, Copy, Debug)]
pub struct DistanceMatrix<'a> {
    data: &'a [f64],
    samples: Option<usize>,
}

impl<'a> DistanceMatrix<'a> {
    /// Wrap a flat row-major buffer with `cols` columns.
    pub fn new(data: &'a [f64], cols: usize) -> Result<Self> {
        if cols != PAIR_WIDTH {
            return Err(Error::invalid(format!(
                "distance matrix must have {PAIR_WIDTH} columns, got {cols}"
            )));
        }
        if data.len() % PAIR_WIDTH != 0 {
            return Err(Error::invalid(format!(
                "distance matrix buffer of length {} is not a whole number of rows",
                data.len()
            )));
        }
        Ok(Self {
            data,
            samples: None,
        })
    }

    /// Wrap a slice of `[x, y]` pairs.
    pub fn from_pairs(pairs: &'a [[f64; 2]]) -> Self {
        Self {
            data: pairs.as_flattened(),
            samples: None,
        }
    }

    /// Declare that rows enumerate all pairs of `n` samples in condensed order.
    pub fn with_samples(mut self, n: usize) -> Result<Self> {
        let expected = pair_count(n);
        if expected != self.rows() {
            return Err(Error::invalid(format!(
                "{n} samples imply {expected} pairs but the matrix has {} rows",
                self.rows()
            )));
        }
        self.samples = Some(n);
        Ok(self)
    }

    /// Like [`Self::with_samples`], deriving `n` from the row count.
    pub fn with_inferred_samples(self) -> Result<Self> {
        let rows = self.rows();
        let n = samples_for_rows(rows).ok_or_else(|| {
            Error::invalid(format!(
                "{rows} rows is not a pair count for any number of samples"
            ))
        })?;
        self.with_samples(n)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len() / PAIR_WIDTH
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample count, when the matrix was declared condensed.
    pub fn samples(&self) -> Option<usize> {
        self.samples
    }

    /// Coordinates of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 2] {
        [self.data[PAIR_WIDTH * i], self.data[PAIR_WIDTH * i + 1]]
    }

    /// Flat row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// The two indices reported for row `row` in edge output: sample indices
    /// for a condensed matrix, otherwise the row index twice.
    pub fn pair_of(&self, row: usize) -> (usize, usize) {
        match self.samples {
            Some(n) => condensed_to_square(row, n),
            None => (row, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_width() {
        let data = [0.1, 0.2, 0.3];
        assert!(matches!(
            DistanceMatrix::new(&data, 3),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            DistanceMatrix::new(&data, 2),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rows_are_read_in_order() {
        let data = [0.1, 0.2, 0.3, 0.4];
        let m = DistanceMatrix::new(&data, 2).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.row(1), [0.3, 0.4]);
        assert_eq!(m.pair_of(1), (1, 1));
    }

    #[test]
    fn condensed_matrix_reports_sample_pairs() {
        let pairs = [[0.0, 0.0]; 6];
        let m = DistanceMatrix::from_pairs(&pairs)
            .with_inferred_samples()
            .unwrap();
        assert_eq!(m.samples(), Some(4));
        assert_eq!(m.pair_of(0), (0, 1));
        assert_eq!(m.pair_of(3), (1, 2));
        assert_eq!(m.pair_of(5), (2, 3));
    }

    #[test]
    fn sample_count_must_match_rows() {
        let pairs = [[0.0, 0.0]; 5];
        let m = DistanceMatrix::from_pairs(&pairs);
        assert!(m.with_inferred_samples().is_err());
        assert!(m.with_samples(4).is_err());
    }
}
