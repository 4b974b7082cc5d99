//! Compute a small hull and show the coordinate conversions.
//!
//! Usage:
//!   cargo run -p hullscan --example demo

use hullscan::geom2::{points_from_flat, points_to_pairs};
use hullscan::{HullBuilder, HullCfg, Point, Winding};

fn main() -> Result<(), hullscan::HullError> {
    let points = [
        Point::new(11.1, -0.3),
        Point::new(-11.111, -0.3),
        Point::new(2.0, 1.2),
        Point::new(-0.0055, 4.0),
    ];
    let builder = HullBuilder::new(&points);
    println!("ccw hull: {:?}", points_to_pairs(&builder.hull()));

    let cw = builder.compute_hull(&HullCfg {
        winding: Winding::Clockwise,
        ..HullCfg::default()
    })?;
    println!("cw hull:  {:?}", points_to_pairs(&cw));

    let flat = [0.1, 1.1, 1.1, 0.1, 0.2, 0.3];
    println!("flat {flat:?} -> {:?}", points_to_pairs(&points_from_flat(&flat)?));
    Ok(())
}
