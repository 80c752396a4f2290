//! Closest pair of points in the plane by divide and conquer.
//!
//! Layout
//! - `geom`: point type, metric, coordinate orders, result types.
//! - `sort`: x-sorted points plus an x-rank annotated y-sorted view.
//! - `strip`: the cross-boundary merge step.
//! - `engine`: sequential, process-, thread-, and pool-parallel recursions
//!   behind one `solve` entry point.
//! - `brute`, `cloud`: quadratic oracle and reproducible point clouds.
//!
//! API Policy
//! - Project-internal crate. `api` is the curated import surface; breaking
//!   changes are fine when they improve the design.

pub mod api;
pub mod brute;
pub mod cloud;
pub mod engine;
pub mod error;
pub mod geom;
pub mod sort;
pub mod strip;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{solve, solve_with_stats, SolveCfg, SolveStats, Strategy};
pub use error::SolveError;
pub use geom::{PairResult, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::closest_pair_brute;
    pub use crate::engine::{
        solve, solve_with_defaults, solve_with_stats, threshold_for_workers, SolveCfg, SolveStats,
        Strategy,
    };
    pub use crate::error::SolveError;
    pub use crate::geom::{distance, PairResult, Point};
    pub use crate::cloud::{draw_cloud, CloudCfg, ReplayToken};
}
