//! Divide-and-conquer closest pair with interchangeable execution strategies.
//!
//! Purpose
//! - One recursion (split at the x-median, solve halves, merge across the
//!   split line) shared by a sequential reference engine and parallel variants
//!   that fork processes, spawn threads, or use a rayon pool for the left half.
//! - All strategies return the same distance bit for bit; the returned pair may
//!   differ when several pairs share the minimum.
//!
//! Ownership
//! - `Subproblem::xs` borrows the x-sorted backing store created by `solve` and
//!   is never copied or mutated. Each call owns its y-sorted `ys`; a split
//!   copies `ys` into the two halves once, so memory stays O(n log n).
//! - Odd sizes overlap by one point: the left half is `[0, ceil(n/2))`, the
//!   right half `[floor(n/2), n)`. Sizes below 2 are never constructed.
//!
//! Code cross-refs: `sort::sort_two_keys`, `strip::merge_across`.

mod cfg;
mod pool;
#[cfg(unix)]
mod process;
mod sequential;
mod thread;

pub use cfg::{threshold_for_workers, SolveCfg, SolveStats, Strategy};

use crate::error::SolveError;
use crate::geom::{IndexedPoint, PairResult, Point};
use crate::sort::{sort_two_keys, SortedPoints};
use crate::strip::merge_across;

/// Closest pair of `points` under the strategy in `cfg`.
///
/// Errors: fewer than two points, non-finite coordinates, or an OS failure in
/// a parallel strategy. No partial result is ever returned.
pub fn solve(points: &[Point], cfg: SolveCfg) -> Result<PairResult, SolveError> {
    solve_with_stats(points, cfg).map(|(pair, _)| pair)
}

/// Sequential `solve`.
pub fn solve_with_defaults(points: &[Point]) -> Result<PairResult, SolveError> {
    solve(points, SolveCfg::default())
}

/// `solve` plus per-call counters.
pub fn solve_with_stats(
    points: &[Point],
    cfg: SolveCfg,
) -> Result<(PairResult, SolveStats), SolveError> {
    let SortedPoints { xs, ys } = sort_two_keys(points)?;
    let root = Subproblem { xs: &xs, ys };
    let (pair, workers) = match cfg.strategy {
        Strategy::Sequential => (sequential::closest(root), 0),
        Strategy::Process { threshold } => run_process(root, threshold)?,
        Strategy::Thread { threshold } => thread::closest(root, threshold)?,
        Strategy::Pool { threshold } => pool::closest(root, threshold),
    };
    tracing::debug!(
        n = xs.len(),
        strategy = cfg.strategy.name(),
        workers,
        distance = pair.distance,
        "solve"
    );
    Ok((pair, SolveStats { workers }))
}

#[cfg(unix)]
fn run_process(root: Subproblem<'_>, threshold: usize) -> Result<(PairResult, usize), SolveError> {
    process::closest(root, threshold)
}

#[cfg(not(unix))]
fn run_process(_: Subproblem<'_>, _: usize) -> Result<(PairResult, usize), SolveError> {
    Err(SolveError::Process(
        "process strategy requires a unix platform".to_string(),
    ))
}

/// One recursive call's input: an x-sorted view plus its own y-sorted copy.
#[derive(Debug)]
pub(crate) struct Subproblem<'a> {
    pub xs: &'a [Point],
    pub ys: Vec<IndexedPoint>,
}

/// Two halves of a subproblem and the x-coordinate of the left half's
/// rightmost point.
pub(crate) struct Split<'a> {
    pub left: Subproblem<'a>,
    pub right: Subproblem<'a>,
    pub split_x: f64,
}

impl<'a> Subproblem<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Leaf solution for exactly two points.
    #[inline]
    pub fn base_pair(&self) -> PairResult {
        debug_assert_eq!(self.len(), 2);
        PairResult::of(self.xs[0], self.xs[1])
    }

    /// Split at the x-median. Requires `len() > 2`.
    ///
    /// The left half keeps `x_pos` as is; the right half's ranks are re-based
    /// to its own start so they index into `right.xs`.
    pub fn split(&self) -> Split<'a> {
        let n = self.len();
        debug_assert!(n > 2, "split needs more than two points");
        let left_len = n.div_ceil(2);
        let right_start = n / 2;
        let xs: &'a [Point] = self.xs;

        let mut left_ys = Vec::with_capacity(left_len);
        let mut right_ys = Vec::with_capacity(n - right_start);
        for e in &self.ys {
            if e.x_pos < left_len {
                left_ys.push(*e);
            }
            if e.x_pos >= right_start {
                right_ys.push(IndexedPoint::new(e.p, e.x_pos - right_start));
            }
        }
        debug_assert_eq!(left_ys.len(), left_len);
        debug_assert_eq!(right_ys.len(), n - right_start);

        Split {
            left: Subproblem {
                xs: &xs[..left_len],
                ys: left_ys,
            },
            right: Subproblem {
                xs: &xs[right_start..],
                ys: right_ys,
            },
            split_x: xs[left_len - 1].x,
        }
    }
}

/// Merge two solved halves: the strip pair wins only if strictly closer than
/// both; otherwise the closer half, with the right half winning exact ties.
pub(crate) fn combine(
    ys: &[IndexedPoint],
    split_x: f64,
    left: PairResult,
    right: PairResult,
) -> PairResult {
    let delta = left.distance.min(right.distance);
    let cross = merge_across(ys, split_x, delta);
    if cross.distance < delta {
        cross
    } else if left.distance < right.distance {
        left
    } else {
        right
    }
}
