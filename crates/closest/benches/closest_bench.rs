//! Criterion benchmarks for the closest-pair strategies.
//! Focus sizes: n in {1k, 10k, 100k}; parallel strategies use 8 workers.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p closest

use closest::api::{draw_cloud, solve, threshold_for_workers, CloudCfg, ReplayToken, SolveCfg};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    group.sample_size(10);
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = draw_cloud(CloudCfg::with_count(n), ReplayToken::new(43, n as u64));
        let t = threshold_for_workers(n, 8);
        let mut cfgs = vec![
            ("seq", SolveCfg::sequential()),
            ("thread", SolveCfg::thread(t)),
            ("pool", SolveCfg::pool(t)),
        ];
        if cfg!(unix) {
            cfgs.push(("proc", SolveCfg::process(t)));
        }
        for (name, cfg) in cfgs {
            group.bench_with_input(BenchmarkId::new(name, n), &pts, |b, pts| {
                b.iter(|| solve(pts, cfg).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
