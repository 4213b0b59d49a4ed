//! Geometry of the decision boundary in the (core, accessory) distance plane.
//!
//! A [`Boundary`] is one concrete line; a pair is connected when its point lies
//! on the origin side of it, boundary included. [`SweepLine`] and
//! [`InterceptSweep`] are one-parameter families of boundaries whose inside
//! region only grows as the parameter increases.

mod boundary;
mod family;

pub use boundary::{Boundary, Side, Slope};
pub use family::{BoundaryFamily, InterceptSweep, SweepLine};
