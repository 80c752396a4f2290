//! Basic value types shared by the sorter, the strip step, and the engines.
//!
//! - `Point`: a 2D position (`Vector2<f64>`), immutable by convention.
//! - `IndexedPoint`: a point plus its rank in the x-sorted order.
//! - `PairResult`: an unordered pair with its distance; `PairResult::none()`
//!   is the infinite-distance sentinel.

use nalgebra::Vector2;

use super::util::distance;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// A point annotated with its position in the x-sorted order of the
/// subproblem that owns it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedPoint {
    pub p: Point,
    pub x_pos: usize,
}

impl IndexedPoint {
    #[inline]
    pub fn new(p: Point, x_pos: usize) -> Self {
        Self { p, x_pos }
    }
}

/// Closest pair candidate: two points and their Euclidean distance.
///
/// Plain `Copy` data without heap storage, so a value can be written into a
/// memory region shared with a forked process.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairResult {
    pub p1: Point,
    pub p2: Point,
    pub distance: f64,
}

impl PairResult {
    /// Pair with its distance computed directly.
    #[inline]
    pub fn of(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            distance: distance(p1, p2),
        }
    }

    /// Sentinel for "no pair": infinite distance, points unspecified.
    #[inline]
    pub fn none() -> Self {
        Self {
            p1: Point::zeros(),
            p2: Point::zeros(),
            distance: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.distance == f64::INFINITY
    }

    /// True if `{p1, p2}` equals `{a, b}` as an unordered pair.
    pub fn same_points(&self, a: Point, b: Point) -> bool {
        (self.p1 == a && self.p2 == b) || (self.p1 == b && self.p2 == a)
    }
}
