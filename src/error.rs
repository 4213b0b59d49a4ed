//! Error taxonomy shared by every library entry point.
//!
//! All checks run eagerly, before any row of the matrix is classified, so a
//! failed call never produces partial output.

use thiserror::Error;

/// Failure modes of the classification and sweep operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input violates a precondition (unsorted sweep sequence,
    /// non-positive oblique intercept, malformed matrix shape, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A ratio test with a zero denominator. [`crate::geometry::Boundary::new`]
    /// rejects such intercepts up front as `InvalidArgument` and the oblique
    /// test asserts the guard in debug builds, so library calls never return
    /// this variant.
    #[error("degenerate arithmetic: {0}")]
    ArithmeticDegenerate(String),
    /// The worker pool for the requested thread count could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
