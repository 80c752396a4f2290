//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benchmarks, and experiments. Breaking changes are allowed and expected.

// Geometry
pub use crate::geom::{cmp_x, cmp_y, distance, IndexedPoint, PairResult, Point};
// Building blocks
pub use crate::sort::{sort_two_keys, SortedPoints};
pub use crate::strip::{closest_in_strip, merge_across, strip_candidates, STRIP_WINDOW};
// Engines
pub use crate::engine::{
    solve, solve_with_defaults, solve_with_stats, threshold_for_workers, SolveCfg, SolveStats,
    Strategy,
};
pub use crate::error::SolveError;
// Oracle and inputs
pub use crate::brute::closest_pair_brute;
pub use crate::cloud::{draw_cloud, draw_cloud_with, CloudCfg, ReplayToken};
