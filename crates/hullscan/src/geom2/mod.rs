//! Planar convex hulls (Graham scan) and supporting predicates.
//!
//! Purpose
//! - Provide one pure hull routine, `graham_scan`, with explicit tolerance,
//!   collinear-point policy, and winding direction.
//! - Keep the numerics eps-aware and trig-free: orientation is always a cross
//!   product compared against `HullCfg::tolerance`.
//!
//! Layout
//! - `types`: `Point`, `Winding`, `HullCfg`.
//! - `scan`: pivot, angular sort, collinear runs, stack scan, `HullBuilder`.
//! - `util`: `ccw`, `cross`, area, convexity, containment.
//! - `convert`: flat and paired coordinate arrays.
//! - `rand`: seeded point clouds with known hulls.

pub mod convert;
pub mod rand;
mod scan;
mod types;
mod util;

pub use convert::{
    point_from_pair, point_to_pair, points_from_flat, points_from_pairs, points_to_flat,
    points_to_pairs,
};
pub use scan::{graham_scan, pivot, HullBuilder};
pub use types::{is_valid_point, HullCfg, Point, Winding, DEFAULT_TOLERANCE};
pub use util::{ccw, contains_point, cross, is_convex, signed_area};
