//! Seeded point clouds for tests, benchmarks, and the CLI.
//!
//! Purpose
//! - Reproducible inputs whose hull is known in advance, so randomized checks
//!   can compare against an exact answer.
//!
//! Model
//! - `draw_box_cloud`: corners of `[-h, h]²`, then uniform interior points, then
//!   points placed exactly on the four edges. Hull = the four corners.
//! - `draw_circle`: points on a circle with a random phase; every point is a
//!   hull vertex (worst case for the stack scan).
//! - `draw_line_cloud`: points along a segment, nudged off it by at most a given
//!   jitter; nearly every triple is collinear up to rounding.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(
            self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)),
        ))
    }
}

/// Box cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct BoxCloudCfg {
    /// Half side length `h` of the square `[-h, h]²`. Clamped to be positive.
    pub half_extent: f64,
    /// Uniform samples in the open square.
    pub interior: usize,
    /// Samples on the square's edges (exactly collinear with two corners).
    pub boundary: usize,
}

impl Default for BoxCloudCfg {
    fn default() -> Self {
        Self {
            half_extent: 3.0,
            interior: 50,
            boundary: 50,
        }
    }
}

/// Corners in counterclockwise order starting at the lowest-left one.
pub fn box_corners(half_extent: f64) -> [Point; 4] {
    let h = half_extent;
    [
        Vector2::new(-h, -h),
        Vector2::new(h, -h),
        Vector2::new(h, h),
        Vector2::new(-h, h),
    ]
}

/// Draw a box cloud: `[corners..., interior..., boundary...]`.
pub fn draw_box_cloud(cfg: BoxCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs().max(1e-9);
    let mut pts = Vec::with_capacity(4 + cfg.interior + cfg.boundary);
    pts.extend(box_corners(h));
    for _ in 0..cfg.interior {
        pts.push(Vector2::new(rng.gen_range(-h..h), rng.gen_range(-h..h)));
    }
    for _ in 0..cfg.boundary {
        let t = rng.gen_range(-h..h);
        let p = match rng.gen_range(0..4u8) {
            0 => Vector2::new(h, t),
            1 => Vector2::new(-h, t),
            2 => Vector2::new(t, h),
            _ => Vector2::new(t, -h),
        };
        pts.push(p);
    }
    pts
}

/// Draw `n` points on the circle of `radius` around the origin (random phase,
/// angles sorted, so the output is already in counterclockwise order).
pub fn draw_circle(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut angles: Vec<f64> = (0..n)
        .map(|_| phase + rng.gen::<f64>() * std::f64::consts::TAU)
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|a| Vector2::new(radius * a.cos(), radius * a.sin()))
        .collect()
}

/// Draw `n` points on the segment `from -> to`, each shifted vertically by a
/// uniform offset in `[-jitter, jitter)`. A zero jitter keeps them on the line
/// up to rounding.
pub fn draw_line_cloud(
    from: Point,
    to: Point,
    n: usize,
    jitter: f64,
    tok: ReplayToken,
) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let span = to - from;
    let jitter = jitter.abs();
    (0..n)
        .map(|_| {
            let t = rng.gen::<f64>();
            let dy = if jitter > 0.0 {
                rng.gen_range(-jitter..jitter)
            } else {
                0.0
            };
            from + span * t + Vector2::new(0.0, dy)
        })
        .collect()
}
