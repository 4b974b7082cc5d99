//! Conversions between `Point` sequences and plain coordinate arrays.
//!
//! Flat arrays interleave coordinates: `[x0, y0, x1, y1, ...]`.

use super::types::Point;
use crate::error::HullError;

#[inline]
pub fn point_from_pair(pair: [f64; 2]) -> Point {
    Point::new(pair[0], pair[1])
}

#[inline]
pub fn point_to_pair(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

/// Split an interleaved array into points. Fails on odd length.
pub fn points_from_flat(flat: &[f64]) -> Result<Vec<Point>, HullError> {
    if flat.len() % 2 != 0 {
        return Err(HullError::OddLength(flat.len()));
    }
    Ok(flat
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

pub fn points_from_pairs(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().copied().map(point_from_pair).collect()
}

pub fn points_to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(point_to_pair).collect()
}

pub fn points_to_flat(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_odd_length_is_an_error() {
        assert_eq!(
            points_from_flat(&[1.0, 2.0, 3.0]),
            Err(HullError::OddLength(3))
        );
        assert_eq!(points_from_flat(&[]), Ok(Vec::new()));
    }

    #[test]
    fn flat_and_pairs_agree() {
        let flat = [0.1, 1.1, 1.1, 0.1, 0.2, 0.3];
        let from_flat = points_from_flat(&flat).unwrap();
        let from_pairs = points_from_pairs(&[[0.1, 1.1], [1.1, 0.1], [0.2, 0.3]]);
        assert_eq!(from_flat, from_pairs);
        assert_eq!(points_to_flat(&from_flat), flat.to_vec());
        assert_eq!(points_to_pairs(&from_flat)[2], [0.2, 0.3]);
    }

    #[test]
    fn nan_coordinates_pass_through_unchanged() {
        let pts = points_from_flat(&[f64::NAN, 10.0]).unwrap();
        assert!(pts[0].x.is_nan());
        assert_eq!(pts[0].y, 10.0);
    }
}
