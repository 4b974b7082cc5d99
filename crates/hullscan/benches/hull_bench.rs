//! Criterion benchmarks for the Graham scan.
//! Focus sizes: n in {10, 100, 1_000, 10_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hullscan

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullscan::geom2::rand::{
    draw_box_cloud, draw_circle, draw_line_cloud, BoxCloudCfg, ReplayToken,
};
use hullscan::{graham_scan, HullCfg, Point};

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("graham_scan");
    let cfg = HullCfg::default();
    let keep = HullCfg {
        include_collinear: true,
        ..HullCfg::default()
    };
    for &n in &[10usize, 100, 1_000, 10_000] {
        // Mostly interior points: the scan pops a lot, the sort dominates.
        group.bench_with_input(BenchmarkId::new("box_cloud", n), &n, |b, &n| {
            let box_cfg = BoxCloudCfg {
                half_extent: 3.0,
                interior: n,
                boundary: n / 10,
            };
            b.iter_batched(
                || draw_box_cloud(box_cfg, ReplayToken::new(43, n as u64)),
                |pts| {
                    let _hull = graham_scan(&pts, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("box_cloud_keep_collinear", n), &n, |b, &n| {
            let box_cfg = BoxCloudCfg {
                half_extent: 3.0,
                interior: n,
                boundary: n / 10,
            };
            b.iter_batched(
                || draw_box_cloud(box_cfg, ReplayToken::new(44, n as u64)),
                |pts| {
                    let _hull = graham_scan(&pts, &keep).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        // Every point on the hull: nothing is popped.
        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || draw_circle(n, 1.0, ReplayToken::new(45, n as u64)),
                |pts| {
                    let _hull = graham_scan(&pts, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        // One long collinear run up to rounding.
        group.bench_with_input(BenchmarkId::new("near_line", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let (from, to) = (Point::new(0.0, 0.0), Point::new(10.0, 3.0));
                    draw_line_cloud(from, to, n, 1e-12, ReplayToken::new(46, n as u64))
                },
                |pts| {
                    let _hull = graham_scan(&pts, &keep).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
