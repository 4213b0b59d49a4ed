use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of the decision line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slope {
    /// `x = x_max`; only the core distance is tested.
    Vertical = 0,
    /// `y = y_max`; only the accessory distance is tested.
    Horizontal = 1,
    /// Line through `(x_max, 0)` and `(0, y_max)`.
    Oblique = 2,
}

impl TryFrom<i32> for Slope {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Vertical),
            1 => Ok(Self::Horizontal),
            2 => Ok(Self::Oblique),
            other => Err(Error::invalid(format!(
                "slope code must be 0, 1 or 2, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Oblique => "oblique",
        };
        f.write_str(name)
    }
}

/// Position of a point relative to a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Inside,
    OnBoundary,
    Outside,
}

impl Side {
    /// Signed encoding: `-1` inside, `0` on the line, `1` outside.
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Self::Inside => -1.0,
            Self::OnBoundary => 0.0,
            Self::Outside => 1.0,
        }
    }

    /// Closed half-plane membership.
    #[inline]
    pub fn is_connected(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// One concrete decision line.
///
/// Construct through [`Boundary::new`], which enforces the intercept
/// preconditions; the classification methods assume they hold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Boundary {
    slope: Slope,
    x_max: f64,
    y_max: f64,
}

impl Boundary {
    /// Validate and build a boundary.
    ///
    /// Vertical mode reads only `x_max`, horizontal only `y_max`; the ignored
    /// intercept may be any value. Oblique mode requires both intercepts to be
    /// finite and strictly positive.
    pub fn new(slope: Slope, x_max: f64, y_max: f64) -> Result<Self> {
        match slope {
            Slope::Vertical => require_finite("x_max", x_max)?,
            Slope::Horizontal => require_finite("y_max", y_max)?,
            Slope::Oblique => {
                require_positive("x_max", x_max)?;
                require_positive("y_max", y_max)?;
            }
        }
        Ok(Self {
            slope,
            x_max,
            y_max,
        })
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Signed, unnormalised position of `p` relative to the line; `<= 0` is
    /// the connected side. Oblique mode uses the intercept form
    /// `x / x_max + y / y_max - 1`.
    #[inline]
    pub fn signed_excess(&self, p: [f64; 2]) -> f64 {
        match self.slope {
            Slope::Vertical => p[0] - self.x_max,
            Slope::Horizontal => p[1] - self.y_max,
            Slope::Oblique => {
                debug_assert!(
                    self.x_max > 0.0 && self.y_max > 0.0,
                    "oblique boundary with non-positive intercept ({}, {})",
                    self.x_max,
                    self.y_max
                );
                p[0] / self.x_max + p[1] / self.y_max - 1.0
            }
        }
    }

    /// `true` when `p` is on the origin side of the line or on the line.
    #[inline]
    pub fn contains(&self, p: [f64; 2]) -> bool {
        self.signed_excess(p) <= 0.0
    }

    /// Three-way classification of `p`.
    #[inline]
    pub fn side(&self, p: [f64; 2]) -> Side {
        let d = self.signed_excess(p);
        if d < 0.0 {
            Side::Inside
        } else if d == 0.0 {
            Side::OnBoundary
        } else {
            // also NaN
            Side::Outside
        }
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!("{name} must be finite, got {value}")))
    }
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "oblique boundary needs {name} > 0, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_codes_round_trip() {
        for slope in [Slope::Vertical, Slope::Horizontal, Slope::Oblique] {
            assert_eq!(Slope::try_from(slope as i32).unwrap(), slope);
        }
        assert!(Slope::try_from(3).is_err());
        assert!(Slope::try_from(-1).is_err());
    }

    #[test]
    fn vertical_tests_x_only() {
        let b = Boundary::new(Slope::Vertical, 0.5, f64::NAN).unwrap();
        assert!(b.contains([0.1, 100.0]));
        assert!(b.contains([0.5, 0.0]));
        assert!(!b.contains([0.51, 0.0]));
    }

    #[test]
    fn horizontal_tests_y_only() {
        let b = Boundary::new(Slope::Horizontal, -3.0, 0.25).unwrap();
        assert!(b.contains([9.0, 0.25]));
        assert!(!b.contains([0.0, 0.3]));
    }

    #[test]
    fn oblique_uses_intercept_form() {
        let b = Boundary::new(Slope::Oblique, 0.4, 0.5).unwrap();
        assert!(b.contains([0.0, 0.0]));
        assert!(b.contains([0.4, 0.0]));
        assert!(b.contains([0.0, 0.5]));
        assert!(b.contains([0.1, 0.2]));
        assert!(!b.contains([0.3, 0.2]));
    }

    #[test]
    fn oblique_rejects_non_positive_intercepts() {
        for (x, y) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (f64::INFINITY, 1.0)] {
            assert!(matches!(
                Boundary::new(Slope::Oblique, x, y),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-positive intercept")]
    fn unchecked_zero_intercept_trips_ratio_guard() {
        let b = Boundary {
            slope: Slope::Oblique,
            x_max: 0.0,
            y_max: 1.0,
        };
        b.contains([0.1, 0.1]);
    }

    #[test]
    fn side_encodes_ties() {
        let b = Boundary::new(Slope::Vertical, 0.5, 0.0).unwrap();
        assert_eq!(b.side([0.25, 0.0]), Side::Inside);
        assert_eq!(b.side([0.5, 0.0]), Side::OnBoundary);
        assert_eq!(b.side([0.75, 0.0]), Side::Outside);
        assert_eq!(b.side([f64::NAN, 0.0]), Side::Outside);
        assert!(!b.contains([f64::NAN, 0.0]));
        assert_eq!(Side::Inside.as_f32(), -1.0);
        assert!(Side::OnBoundary.is_connected());
    }
}
