//! Point-set input formats accepted by the `hull` subcommand.
//!
//! JSON shapes (a missing or `null` coordinate becomes NaN and is dropped by the scan):
//! - flat: `[x0, y0, x1, y1, ...]`
//! - pairs: `[[x0, y0], [x1, y1], ...]`
//! - objects: `[{"x": x0, "y": y0}, ...]`

use anyhow::{Context, Result};
use hullscan::geom2::points_from_flat;
use hullscan::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PointsJson {
    Flat(Vec<Option<f64>>),
    Pairs(Vec<[Option<f64>; 2]>),
    Objects(Vec<XyJson>),
}

#[derive(Debug, Deserialize)]
pub struct XyJson {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[inline]
fn coord(v: Option<f64>) -> f64 {
    v.unwrap_or(f64::NAN)
}

impl PointsJson {
    pub fn into_points(self) -> Result<Vec<Point>> {
        Ok(match self {
            PointsJson::Flat(flat) => {
                let flat: Vec<f64> = flat.into_iter().map(coord).collect();
                points_from_flat(&flat)?
            }
            PointsJson::Pairs(pairs) => pairs
                .into_iter()
                .map(|[x, y]| Point::new(coord(x), coord(y)))
                .collect(),
            PointsJson::Objects(objs) => objs
                .into_iter()
                .map(|o| Point::new(coord(o.x), coord(o.y)))
                .collect(),
        })
    }
}

pub fn parse_points(json: &str) -> Result<Vec<Point>> {
    let parsed: PointsJson =
        serde_json::from_str(json).context("expected a flat array, [x, y] pairs, or {x, y} objects")?;
    parsed.into_points()
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_with_nulls() {
        let pts = parse_points("[100, 150, null, null, 200, 130]").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(100.0, 150.0));
        assert!(pts[1].x.is_nan() && pts[1].y.is_nan());
    }

    #[test]
    fn flat_odd_length_rejected() {
        let err = parse_points("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("odd length 3"));
    }

    #[test]
    fn pairs_and_objects() {
        let pairs = parse_points("[[1.5, -2], [null, 4]]").unwrap();
        assert_eq!(pairs[0], Point::new(1.5, -2.0));
        assert!(pairs[1].x.is_nan());

        let objs = parse_points(r#"[{"x": 1, "y": 2}, {"x": 3}]"#).unwrap();
        assert_eq!(objs[0], Point::new(1.0, 2.0));
        assert!(objs[1].y.is_nan());
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_points(r#"{"points": 1}"#).is_err());
    }
}
