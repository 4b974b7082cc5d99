//! Planar convex hulls via Graham scan.
//!
//! Entry points
//! - `graham_scan(points, &cfg)`: pure function of a borrowed point set.
//! - `HullBuilder`: holds a borrowed point set between calls.
//!
//! Non-finite points are dropped silently; only a bad configuration (negative or
//! non-finite tolerance) or an odd-length flat array is an error.

pub mod error;
pub mod geom2;

pub use error::HullError;
pub use geom2::{graham_scan, HullBuilder, HullCfg, Point, Winding, DEFAULT_TOLERANCE};
pub use nalgebra::Vector2 as Vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{
        draw_box_cloud, draw_circle, draw_line_cloud, BoxCloudCfg, ReplayToken,
    };
    pub use crate::geom2::{
        ccw, graham_scan, is_convex, pivot, points_from_flat, points_from_pairs, points_to_flat,
        points_to_pairs, signed_area, HullBuilder, HullCfg, Point, Winding, DEFAULT_TOLERANCE,
    };
    pub use nalgebra::Vector2 as Vec2;
}
