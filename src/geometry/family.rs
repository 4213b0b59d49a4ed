use super::boundary::{Boundary, Slope};
use crate::error::{Error, Result};
use nalgebra::Vector2;

/// A one-parameter family of boundaries whose connected region grows
/// monotonically with the parameter.
pub trait BoundaryFamily: Sync {
    /// The concrete boundary at sweep parameter `param`.
    fn boundary_at(&self, param: f64) -> Result<Boundary>;

    /// Smallest parameter at which `p` becomes connected, in closed form.
    /// `+inf` when no parameter connects it. This is an estimate under float
    /// rounding; [`Boundary::contains`] stays authoritative.
    fn join_param(&self, p: [f64; 2]) -> f64;
}

/// Base boundary translated along a fixed direction.
///
/// The direction is the unit vector from anchor `(x0, y0)` to `(x1, y1)` and
/// the offset is the distance travelled from `(x0, y0)`. Oblique boundaries
/// are perpendicular to the direction; vertical and horizontal ones keep their
/// orientation and follow the travelling point.
///
/// The oblique intercepts are computed as `(u·p0 + offset) / u.x` and
/// `/ u.y`, so their rounding can leave the anchor `(x0, y0)` just outside the
/// boundary at offset 0 even though it lies on that line exactly. Such a pair
/// then joins at the next step. Sweep batches still agree with [`assign`] on
/// the same boundary at every step, since both use [`Boundary::contains`].
///
/// [`assign`]: crate::assign::assign
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepLine {
    slope: Slope,
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    base: f64,
}

impl SweepLine {
    pub fn new(slope: Slope, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return Err(Error::invalid(format!(
                "sweep anchors must be finite, got ({x0}, {y0}) -> ({x1}, {y1})"
            )));
        }
        let origin = Vector2::new(x0, y0);
        let delta = Vector2::new(x1, y1) - origin;
        let len = delta.norm();
        if len <= 0.0 {
            return Err(Error::invalid("sweep anchors coincide"));
        }
        let dir = delta / len;

        let grows = match slope {
            Slope::Vertical => dir.x > 0.0,
            Slope::Horizontal => dir.y > 0.0,
            Slope::Oblique => dir.x > 0.0 && dir.y > 0.0,
        };
        if !grows {
            return Err(Error::invalid(format!(
                "{slope} sweep from ({x0}, {y0}) towards ({x1}, {y1}) does not move away from the origin"
            )));
        }

        Ok(Self {
            slope,
            origin,
            dir,
            base: dir.dot(&origin),
        })
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }

    /// Unit translation direction.
    pub fn direction(&self) -> [f64; 2] {
        [self.dir.x, self.dir.y]
    }
}

impl BoundaryFamily for SweepLine {
    fn boundary_at(&self, offset: f64) -> Result<Boundary> {
        let anchor = self.origin + self.dir * offset;
        match self.slope {
            Slope::Vertical => Boundary::new(Slope::Vertical, anchor.x, 0.0),
            Slope::Horizontal => Boundary::new(Slope::Horizontal, 0.0, anchor.y),
            Slope::Oblique => {
                let level = self.base + offset;
                if level <= 0.0 {
                    return Err(Error::invalid(format!(
                        "offset {offset} places the oblique boundary on or behind the origin"
                    )));
                }
                Boundary::new(Slope::Oblique, level / self.dir.x, level / self.dir.y)
            }
        }
    }

    fn join_param(&self, p: [f64; 2]) -> f64 {
        match self.slope {
            Slope::Vertical => (p[0] - self.origin.x) / self.dir.x,
            Slope::Horizontal => (p[1] - self.origin.y) / self.dir.y,
            Slope::Oblique => self.dir.dot(&Vector2::new(p[0], p[1])) - self.base,
        }
    }
}

/// Oblique boundaries with a fixed `y_max`, parametrised by `x_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterceptSweep {
    y_max: f64,
}

impl InterceptSweep {
    pub fn new(y_max: f64) -> Result<Self> {
        if !(y_max.is_finite() && y_max > 0.0) {
            return Err(Error::invalid(format!(
                "oblique boundary needs y_max > 0, got {y_max}"
            )));
        }
        Ok(Self { y_max })
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

impl BoundaryFamily for InterceptSweep {
    fn boundary_at(&self, x_max: f64) -> Result<Boundary> {
        Boundary::new(Slope::Oblique, x_max, self.y_max)
    }

    fn join_param(&self, p: [f64; 2]) -> f64 {
        let slack = 1.0 - p[1] / self.y_max;
        if slack > 0.0 {
            p[0] / slack
        } else if slack == 0.0 && p[0] <= 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    }
}
