//! Graham scan convex hull over a borrowed point set.
//!
//! Purpose
//! - Turn an unordered, possibly dirty point set (NaN, ±∞, duplicates) into the
//!   ordered hull polygon, starting at the lowest-then-leftmost point.
//! - Keep the numerics explicit: every orientation test goes through `ccw`/`cross`
//!   and a single tolerance from `HullCfg`.
//!
//! Phases
//! 1. Pivot P0: minimum y, then minimum x, among finite points.
//! 2. Candidates: finite points other than P0 (duplicates kept for now).
//! 3. Angular sort around P0 by a pseudo-angle key (no trig). P0 is the lowest
//!    point, so every candidate sits in the closed upper half-plane and the key
//!    is monotone in the polar angle. Keys are plain values compared with
//!    `total_cmp`, so the order is total even where float cross products are not
//!    transitive. P0 itself stays out of the sort.
//! 4. Collinear runs: a candidate joins the current run only when it is collinear
//!    with P0 (within tolerance) against both the run's first and its farthest
//!    member, so short points cannot chain two distinct rays together. Runs are
//!    ordered by distance, deduplicated, and either collapsed to the farthest
//!    point or kept whole.
//! 5. Stack scan that pops every non-convex turn.
//!
//! Code cross-refs: `types::HullCfg`, `util::{ccw, cross}`

use super::types::{is_valid_point, HullCfg, Point};
use super::util::{ccw, cross, dist2};
use crate::error::HullError;

/// Lowest valid point (minimum y, then minimum x). `None` if no point is finite.
pub fn pivot(points: &[Point]) -> Option<Point> {
    let mut best: Option<Point> = None;
    for p in points.iter().filter(|p| is_valid_point(p)) {
        let lower = match best {
            None => true,
            Some(b) => p.y < b.y || (p.y == b.y && p.x < b.x),
        };
        if lower {
            best = Some(*p);
        }
    }
    best
}

/// Convex hull of `points` under `cfg`.
///
/// The input is never reordered; the result is a fresh vector whose first entry
/// is the pivot. Fails only on an invalid configuration.
pub fn graham_scan(points: &[Point], cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
    cfg.validate()?;
    Ok(scan_validated(points, cfg))
}

fn scan_validated(points: &[Point], cfg: &HullCfg) -> Vec<Point> {
    let Some(p0) = pivot(points) else {
        tracing::debug!(input = points.len(), "no finite points, empty hull");
        return Vec::new();
    };
    let mut candidates: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| is_valid_point(p) && *p != p0)
        .collect();
    if candidates.is_empty() {
        return vec![p0];
    }

    sort_by_polar_angle(p0, &mut candidates, cfg.winding.sign());
    let ordered = resolve_collinear_runs(p0, &candidates, cfg);
    let hull = stack_scan(p0, &ordered, cfg);
    tracing::debug!(
        input = points.len(),
        candidates = candidates.len(),
        resolved = ordered.len(),
        hull = hull.len(),
        pivot_x = p0.x,
        pivot_y = p0.y,
        winding = %cfg.winding,
        "graham scan"
    );
    hull
}

/// Pseudo-angle of `d = p - p0` in the sweep direction: -1 along the starting
/// axis, +1 along the opposite one. Requires `d.y >= 0` and `d != 0`.
#[inline]
fn sweep_key(d: Point, sign: f64) -> f64 {
    -sign * d.x / (d.x.abs() + d.y)
}

/// Sort by polar angle around `p0`, sweeping from the positive x-axis
/// (`sign = 1`) or the negative one (`sign = -1`). Equal keys fall back to
/// distance, then coordinates.
fn sort_by_polar_angle(p0: Point, pts: &mut [Point], sign: f64) {
    pts.sort_by(|a, b| {
        sweep_key(*a - p0, sign)
            .total_cmp(&sweep_key(*b - p0, sign))
            .then_with(|| dist2(*a, p0).total_cmp(&dist2(*b, p0)))
            .then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.y.total_cmp(&b.y))
    });
}

/// Split the angularly sorted points into maximal runs collinear with `p0`.
fn collinear_runs(p0: Point, sorted: &[Point], tol: f64) -> Vec<&[Point]> {
    let mut runs = Vec::new();
    let (mut first, mut far) = (0, 0);
    for (i, p) in sorted.iter().enumerate().skip(1) {
        let v = *p - p0;
        let joins = cross(sorted[first] - p0, v).abs() <= tol
            && cross(sorted[far] - p0, v).abs() <= tol;
        if !joins {
            runs.push(&sorted[first..i]);
            first = i;
            far = i;
        } else if dist2(*p, p0) > dist2(sorted[far], p0) {
            far = i;
        }
    }
    if !sorted.is_empty() {
        runs.push(&sorted[first..]);
    }
    runs
}

/// Flatten the runs back into scan order.
///
/// Runs are ordered nearest-first, except the last run of the sweep when
/// collinear points are kept: that one is walked back towards `p0`, so it goes
/// farthest-first. Nearest-first for the other runs lets the scan pop the
/// interior members before reaching the farthest one.
fn resolve_collinear_runs(p0: Point, sorted: &[Point], cfg: &HullCfg) -> Vec<Point> {
    let runs = collinear_runs(p0, sorted, cfg.tolerance);
    let last = runs.len().saturating_sub(1);
    tracing::trace!(runs = runs.len(), "collinear runs");

    let mut out = Vec::with_capacity(sorted.len());
    for (i, run) in runs.into_iter().enumerate() {
        let mut run = run.to_vec();
        run.sort_by(|a, b| {
            dist2(*a, p0)
                .total_cmp(&dist2(*b, p0))
                .then(a.x.total_cmp(&b.x))
                .then(a.y.total_cmp(&b.y))
        });
        run.dedup();
        if !cfg.include_collinear {
            out.extend(run.last());
        } else if i == last && last > 0 {
            out.extend(run.iter().rev());
        } else {
            out.extend(run);
        }
    }
    out
}

fn stack_scan(p0: Point, ordered: &[Point], cfg: &HullCfg) -> Vec<Point> {
    let sign = cfg.winding.sign();
    let tol = cfg.tolerance;
    // Collinear turns are accepted when edge points are kept, rejected otherwise.
    let accepts = |turn: f64| {
        if cfg.include_collinear {
            turn >= -tol
        } else {
            turn > tol
        }
    };

    let mut stack: Vec<Point> = Vec::with_capacity(ordered.len() + 1);
    stack.push(p0);
    for &p in ordered {
        while stack.len() >= 2 {
            let turn = sign * ccw(stack[stack.len() - 2], stack[stack.len() - 1], p);
            if accepts(turn) {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// Convenience wrapper that holds a borrowed point set between calls.
///
/// The builder never copies or mutates the points; prefer `graham_scan` when the
/// point set is at hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullBuilder<'a> {
    points: &'a [Point],
}

impl<'a> HullBuilder<'a> {
    #[inline]
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Replace the working point set. No validation happens here.
    #[inline]
    pub fn set_points(&mut self, points: &'a [Point]) {
        self.points = points;
    }

    #[inline]
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn compute_hull(&self, cfg: &HullCfg) -> Result<Vec<Point>, HullError> {
        graham_scan(self.points, cfg)
    }

    /// Hull under `HullCfg::default()`.
    pub fn hull(&self) -> Vec<Point> {
        scan_validated(self.points, &HullCfg::default())
    }
}
