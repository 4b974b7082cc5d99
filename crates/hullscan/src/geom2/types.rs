//! Point, winding, and tolerance types used by the scan.
//!
//! - `Point`: plain `Vector2<f64>`; only finite coordinates take part in a hull.
//! - `Winding`: traversal order of the returned hull.
//! - `HullCfg`: centralizes the collinearity epsilon and the two policy switches.
//!
//! Code cross-refs: `scan::graham_scan`, `util::ccw`

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::HullError;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Default collinearity epsilon for cross products.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// True iff both coordinates are finite (not NaN, not ±∞).
#[inline]
pub fn is_valid_point(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Traversal order of a hull.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Winding {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// `+1` for counterclockwise, `-1` for clockwise. Multiplying a `ccw` value by
    /// this sign turns "agrees with the winding" into "is positive".
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winding::CounterClockwise => write!(f, "ccw"),
            Winding::Clockwise => write!(f, "cw"),
        }
    }
}

impl FromStr for Winding {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ccw" | "counterclockwise" => Ok(Winding::CounterClockwise),
            "cw" | "clockwise" => Ok(Winding::Clockwise),
            other => Err(HullError::UnknownWinding(other.to_string())),
        }
    }
}

/// Hull configuration (tolerance and policies), passed per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Cross products with magnitude at most this are treated as zero.
    pub tolerance: f64,
    /// Keep points lying on hull edges instead of only the edge endpoints.
    pub include_collinear: bool,
    /// Traversal order of the returned hull, starting at the pivot.
    pub winding: Winding,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            include_collinear: false,
            winding: Winding::CounterClockwise,
        }
    }
}

impl HullCfg {
    /// Reject a negative or non-finite tolerance.
    pub fn validate(&self) -> Result<(), HullError> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(HullError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
