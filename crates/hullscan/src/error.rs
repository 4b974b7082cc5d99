//! Errors surfaced by hull construction and the coordinate conversions.
//!
//! Invalid points (NaN, infinite) are not errors: the scan drops them. Only a
//! malformed configuration or a malformed flat array is reported.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum HullError {
    /// Tolerance was negative, NaN, or infinite.
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// A flat `[x0, y0, x1, y1, ...]` array had an odd number of entries.
    #[error("flat coordinate array has odd length {0}")]
    OddLength(usize),

    /// A winding name other than `ccw`/`counterclockwise` or `cw`/`clockwise`.
    #[error("unknown winding direction `{0}` (expected `ccw` or `cw`)")]
    UnknownWinding(String),
}
