//! Planar geometry primitives for the closest-pair engines.
//!
//! Purpose
//! - One point type (`Point`, a `nalgebra::Vector2<f64>`), one metric
//!   (`distance`), and the two coordinate orders the sorter needs.
//! - `IndexedPoint` carries the x-rank used to partition a y-sorted view
//!   without re-sorting; `PairResult` is the value every engine returns.
//!
//! Duplicates
//! - Coincident points are legal input. Both orders are total pre-orders:
//!   equal keys compare `Equal` and may appear in either relative order.
//!
//! Code cross-refs: `sort::sort_two_keys`, `strip::merge_across`, `engine::solve`.

mod types;
mod util;

pub use types::{IndexedPoint, PairResult, Point};
pub use util::{check_finite, cmp_x, cmp_y, distance};

#[cfg(test)]
mod tests;
