use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of points: generate inputs, run strategies, compare")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a random point cloud as x,y CSV (plus a provenance sidecar)
    Gen {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinates are drawn from [1, n * scale]
        #[arg(long, default_value_t = 100)]
        scale: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Solve a point set and print the closest pair
    Run {
        /// x,y CSV input; mutually exclusive with --random
        #[arg(long, conflicts_with = "random")]
        input: Option<PathBuf>,
        /// Draw this many random points instead of reading a file
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = StrategyArg::Seq)]
        strategy: StrategyArg,
        /// Number of workers; the fan-out threshold becomes ceil(n / workers)
        #[arg(long, default_value_t = 8)]
        workers: usize,
        /// Explicit fan-out threshold (overrides --workers)
        #[arg(long)]
        threshold: Option<usize>,
        /// Cross-check the distance against the quadratic oracle
        #[arg(long)]
        check: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Seq,
    Proc,
    Thread,
    Pool,
}

#[derive(Serialize)]
struct RunReport {
    strategy: &'static str,
    n: usize,
    threshold: Option<usize>,
    workers: usize,
    p1: [f64; 2],
    p2: [f64; 2],
    distance: f64,
    elapsed_ms: f64,
    oracle_distance: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            n,
            seed,
            scale,
            out,
        } => generate(n, seed, scale, out),
        Action::Run {
            input,
            random,
            seed,
            strategy,
            workers,
            threshold,
            check,
            json,
        } => {
            let pts = load(input, random, seed)?;
            let cfg = build_cfg(strategy, pts.len(), workers, threshold);
            let report = run(&pts, cfg, check)?;
            print_report(&report, json)
        }
    }
}

fn generate(n: usize, seed: u64, scale: u64, out: PathBuf) -> Result<()> {
    tracing::info!(n, seed, scale, out = %out.display(), "gen");
    let cfg = CloudCfg {
        count: n,
        scale,
        integer_grid: true,
    };
    let pts = draw_cloud(cfg, ReplayToken::new(seed, 0));
    points::write_points(&out, &pts)?;
    provenance::write_sidecar(
        &out,
        serde_json::json!({ "n": n, "seed": seed, "scale": scale }),
    )?;
    Ok(())
}

fn load(input: Option<PathBuf>, random: Option<usize>, seed: u64) -> Result<Vec<Point>> {
    match (input, random) {
        (Some(path), _) => points::read_points(&path),
        (None, Some(n)) => Ok(draw_cloud(CloudCfg::with_count(n), ReplayToken::new(seed, 0))),
        (None, None) => bail!("either --input or --random is required"),
    }
}

fn build_cfg(
    strategy: StrategyArg,
    n: usize,
    workers: usize,
    threshold: Option<usize>,
) -> SolveCfg {
    let t = threshold.unwrap_or_else(|| threshold_for_workers(n, workers));
    match strategy {
        StrategyArg::Seq => SolveCfg::sequential(),
        StrategyArg::Proc => SolveCfg::process(t),
        StrategyArg::Thread => SolveCfg::thread(t),
        StrategyArg::Pool => SolveCfg::pool(t),
    }
}

fn run(pts: &[Point], cfg: SolveCfg, check: bool) -> Result<RunReport> {
    let start = Instant::now();
    let (pair, stats) = solve_with_stats(pts, cfg)
        .with_context(|| format!("solving {} points with {}", pts.len(), cfg.strategy.name()))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        n = pts.len(),
        strategy = cfg.strategy.name(),
        workers = stats.workers,
        elapsed_ms,
        "solved"
    );

    let oracle_distance = if check {
        let oracle = closest_pair_brute(pts)?;
        if (oracle.distance - pair.distance).abs() > 0.01 {
            bail!(
                "distance {} disagrees with oracle {}",
                pair.distance,
                oracle.distance
            );
        }
        Some(oracle.distance)
    } else {
        None
    };

    Ok(RunReport {
        strategy: cfg.strategy.name(),
        n: pts.len(),
        threshold: cfg.strategy.threshold(),
        workers: stats.workers,
        p1: [pair.p1.x, pair.p1.y],
        p2: [pair.p2.x, pair.p2.y],
        distance: pair.distance,
        elapsed_ms,
        oracle_distance,
    })
}

fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("p1=({}, {})", report.p1[0], report.p1[1]);
        println!("p2=({}, {})", report.p2[0], report.p2[1]);
        println!("distance={:.4}", report.distance);
    }
    Ok(())
}
