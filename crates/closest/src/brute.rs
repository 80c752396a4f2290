//! Quadratic oracle used to cross-check the divide-and-conquer engines.

use crate::error::{ensure_min_len, SolveError};
use crate::geom::{check_finite, distance, PairResult, Point};

/// Closest pair by comparing every pair once; the first strictly smaller
/// distance wins.
pub fn closest_pair_brute(points: &[Point]) -> Result<PairResult, SolveError> {
    ensure_min_len(points.len())?;
    check_finite(points)?;
    let mut best = PairResult::none();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let d = distance(a, b);
            if d < best.distance {
                best = PairResult {
                    p1: a,
                    p2: b,
                    distance: d,
                };
            }
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn five_point_example() {
        let pts = vec![
            vector![3.0, 9.0],
            vector![1.0, 5.0],
            vector![0.0, 1.0],
            vector![5.0, 3.0],
            vector![8.0, 6.0],
        ];
        let r = closest_pair_brute(&pts).unwrap();
        assert!(r.same_points(vector![0.0, 1.0], vector![1.0, 5.0]));
        assert!((r.distance - 17f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rejects_single_point() {
        assert!(matches!(
            closest_pair_brute(&[vector![0.0, 0.0]]),
            Err(SolveError::TooFewPoints { len: 1 })
        ));
    }
}
