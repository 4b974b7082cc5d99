mod input;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hullscan::geom2::rand::{draw_box_cloud, BoxCloudCfg, ReplayToken};
use hullscan::geom2::{points_from_flat, points_to_flat, points_to_pairs, signed_area};
use hullscan::{graham_scan, HullCfg, Point, Winding, DEFAULT_TOLERANCE};
use provenance::Payload;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Convex hulls of planar point sets (Graham scan)")]
struct Cmd {
    /// Optional label propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point set
    Hull {
        /// JSON file: flat array, [x, y] pairs, or {x, y} objects
        #[arg(long, conflicts_with = "points")]
        input: Option<PathBuf>,
        /// Inline flat coordinates, e.g. --points=0,0,1,0,0,1
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        points: Option<Vec<f64>>,
        #[arg(long, env = "HULL_TOL", default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
        /// Keep points lying on hull edges
        #[arg(long)]
        collinear: bool,
        /// ccw or cw
        #[arg(long, default_value_t = Winding::CounterClockwise)]
        winding: Winding,
        /// Emit the hull as a flat array instead of [x, y] pairs
        #[arg(long)]
        flat: bool,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sample a seeded box cloud (corners, interior, and edge points)
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 50)]
        interior: usize,
        #[arg(long, default_value_t = 50)]
        boundary: usize,
        #[arg(long, default_value_t = 3.0)]
        half_extent: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            points,
            tolerance,
            collinear,
            winding,
            flat,
            out,
        } => {
            let cfg = HullCfg {
                tolerance,
                include_collinear: collinear,
                winding,
            };
            let pts = load_points(input.as_deref(), points)?;
            hull(&pts, cfg, flat, out, cmd.tag)
        }
        Action::Random {
            seed,
            index,
            interior,
            boundary,
            half_extent,
            out,
        } => {
            let cfg = BoxCloudCfg {
                half_extent,
                interior,
                boundary,
            };
            random(cfg, ReplayToken::new(seed, index), out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn load_points(file: Option<&Path>, inline: Option<Vec<f64>>) -> Result<Vec<Point>> {
    match (file, inline) {
        (Some(path), _) => input::read_points(path),
        (None, Some(flat)) => Ok(points_from_flat(&flat)?),
        (None, None) => bail!("pass --input FILE or --points x0,y0,x1,y1,..."),
    }
}

fn hull(
    pts: &[Point],
    cfg: HullCfg,
    flat: bool,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        points = pts.len(),
        tolerance = cfg.tolerance,
        collinear = cfg.include_collinear,
        winding = %cfg.winding,
        tag = ?tag,
        "hull"
    );
    let hull = graham_scan(pts, &cfg)?;
    let coords: Value = if flat {
        json!(points_to_flat(&hull))
    } else {
        json!(points_to_pairs(&hull))
    };
    let params = json!({
        "tolerance": cfg.tolerance,
        "include_collinear": cfg.include_collinear,
        "winding": cfg.winding.to_string(),
    });
    let doc = json!({
        "hull": coords,
        "area": signed_area(&hull).abs(),
        "input_points": pts.len(),
        "hull_points": hull.len(),
        "params": params,
    });
    tracing::info!(hull_points = hull.len(), "done");
    emit(&doc, out, Payload::new(params).with_tag(tag))
}

fn random(
    cfg: BoxCloudCfg,
    tok: ReplayToken,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        seed = tok.seed,
        index = tok.index,
        interior = cfg.interior,
        boundary = cfg.boundary,
        half_extent = cfg.half_extent,
        "random"
    );
    let pts = draw_box_cloud(cfg, tok);
    let doc = json!(points_to_pairs(&pts));
    let params = json!({
        "seed": tok.seed,
        "index": tok.index,
        "interior": cfg.interior,
        "boundary": cfg.boundary,
        "half_extent": cfg.half_extent,
    });
    emit(&doc, out, Payload::new(params).with_tag(tag))
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(json!({ "default_tolerance": DEFAULT_TOLERANCE })).with_tag(tag);
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::document(&payload, &[]))?
    );
    Ok(())
}

/// Print to stdout, or write `out` plus its provenance sidecar.
fn emit(doc: &Value, out: Option<PathBuf>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, serde_json::to_vec_pretty(doc)?)?;
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}
