use std::cmp::Ordering;

use super::types::Point;
use crate::error::SolveError;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1 - p2).norm()
}

/// Order by x only; x-equal points compare `Equal`.
#[inline]
pub fn cmp_x(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x)
}

/// Order by y only; y-equal points compare `Equal`.
#[inline]
pub fn cmp_y(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y)
}

/// Reject NaN or infinite coordinates (first offending index).
pub fn check_finite(points: &[Point]) -> Result<(), SolveError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(SolveError::NonFinite { index }),
        None => Ok(()),
    }
}
