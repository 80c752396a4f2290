//! Two-key sorter: x-sorted points plus an index-annotated y-sorted view.
//!
//! Both sorts use the standard stable merge sort (`slice::sort_by`), so among
//! equal keys the input order is kept within one invocation. Every y-sorted
//! entry stores the position of its point in `xs`, which lets the engines split
//! the y-view along an x-split with a single linear pass.

use crate::error::{ensure_min_len, SolveError};
use crate::geom::{check_finite, cmp_x, cmp_y, IndexedPoint, Point};

/// Output of `sort_two_keys`.
#[derive(Clone, Debug)]
pub struct SortedPoints {
    /// Points ascending by x.
    pub xs: Vec<Point>,
    /// Same points ascending by y; `x_pos` indexes into `xs`.
    pub ys: Vec<IndexedPoint>,
}

impl SortedPoints {
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Sort `points` by x and, independently, by y with x-ranks attached.
///
/// Fails with `TooFewPoints` for fewer than two points and with `NonFinite`
/// for NaN/infinite coordinates.
pub fn sort_two_keys(points: &[Point]) -> Result<SortedPoints, SolveError> {
    ensure_min_len(points.len())?;
    check_finite(points)?;

    let mut xs = points.to_vec();
    xs.sort_by(cmp_x);

    let mut ys: Vec<IndexedPoint> = xs
        .iter()
        .enumerate()
        .map(|(i, &p)| IndexedPoint::new(p, i))
        .collect();
    ys.sort_by(|a, b| cmp_y(&a.p, &b.p));

    Ok(SortedPoints { xs, ys })
}
