//! Orientation predicates and small polygon checks.
//!
//! All predicates take an explicit tolerance; nothing here normalizes vectors,
//! so tolerances scale with squared coordinate magnitude.

use super::types::{Point, Winding};

/// Planar cross product `u × v` (z-component of the 3D cross product).
#[inline]
pub fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Orientation of `a → b → c`: positive for a counterclockwise (left) turn,
/// negative for clockwise, zero when collinear.
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}

#[inline]
pub(crate) fn dist2(p: Point, origin: Point) -> f64 {
    (p - origin).norm_squared()
}

/// Shoelace area of a closed polygon; positive iff counterclockwise.
pub fn signed_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (k, p) in poly.iter().enumerate() {
        let q = poly[(k + 1) % poly.len()];
        twice += cross(*p, q);
    }
    0.5 * twice
}

/// Every turn of the closed polygon agrees with `winding` up to `tol`.
///
/// Polygons with fewer than three vertices are trivially convex.
pub fn is_convex(poly: &[Point], winding: Winding, tol: f64) -> bool {
    let n = poly.len();
    if n < 3 {
        return true;
    }
    let sign = winding.sign();
    (0..n).all(|k| {
        let a = poly[k];
        let b = poly[(k + 1) % n];
        let c = poly[(k + 2) % n];
        sign * ccw(a, b, c) >= -tol
    })
}

/// `p` lies inside or on the boundary of the convex polygon `poly` (given in
/// `winding` order), up to `tol` on each edge test.
pub fn contains_point(poly: &[Point], p: Point, winding: Winding, tol: f64) -> bool {
    let n = poly.len();
    match n {
        0 => false,
        1 => poly[0] == p,
        _ => {
            let sign = winding.sign();
            (0..n).all(|k| sign * ccw(poly[k], poly[(k + 1) % n], p) >= -tol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::convert::points_from_flat;

    fn triple(flat: [f64; 6]) -> (Point, Point, Point) {
        let p = points_from_flat(&flat).unwrap();
        (p[0], p[1], p[2])
    }

    #[test]
    fn ccw_positive_for_counterclockwise() {
        for flat in [
            [0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            [1.1, 0.1, 0.1, 1.1, 0.2, 0.3],
            [0.1, 1.1, 0.2, 0.3, 1.1, 0.1],
            [0.2, 0.3, 1.1, 0.1, 0.1, 1.1],
        ] {
            let (a, b, c) = triple(flat);
            assert!(ccw(a, b, c) > 0.0, "{flat:?}");
        }
    }

    #[test]
    fn ccw_negative_for_clockwise() {
        for flat in [
            [0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
            [-1.0, -1.0, 1.0, 0.5, 3.0, 0.5],
            [1.0, 0.5, 3.0, 0.5, -1.0, -1.0],
            [3.0, 0.5, -1.0, -1.0, 1.0, 0.5],
        ] {
            let (a, b, c) = triple(flat);
            assert!(ccw(a, b, c) < 0.0, "{flat:?}");
        }
    }

    #[test]
    fn ccw_near_zero_for_collinear() {
        for flat in [
            [1.0, -0.1, 1.0, 0.1, 1.0, 0.2],
            [0.1, -2.7, 7.0, -2.7, -1.2, -2.7],
            [0.0, 0.0, 3.0, 1.0, -1.5, -0.5],
            [1.0, -5.9, 0.2, -0.86, -0.2, 1.66],
        ] {
            let (a, b, c) = triple(flat);
            assert!(ccw(a, b, c).abs() < 1e-5, "{flat:?}");
        }
    }

    #[test]
    fn area_and_convexity_of_unit_square() {
        let sq = points_from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
        assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
        assert!(is_convex(&sq, Winding::CounterClockwise, 0.0));
        assert!(!is_convex(&sq, Winding::Clockwise, 0.0));

        let rev: Vec<Point> = sq.iter().rev().copied().collect();
        assert!((signed_area(&rev) + 1.0).abs() < 1e-12);
        assert!(is_convex(&rev, Winding::Clockwise, 0.0));
    }

    #[test]
    fn contains_interior_and_boundary() {
        let sq = points_from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
        let w = Winding::CounterClockwise;
        assert!(contains_point(&sq, Point::new(0.5, 0.5), w, 0.0));
        assert!(contains_point(&sq, Point::new(1.0, 0.3), w, 0.0));
        assert!(!contains_point(&sq, Point::new(1.01, 0.3), w, 0.0));
        assert!(!contains_point(&[], Point::new(0.0, 0.0), w, 0.0));
    }
}
