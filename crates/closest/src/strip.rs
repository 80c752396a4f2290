//! Strip-merge step: best pair straddling the split line.
//!
//! Given the y-sorted view of a subproblem, the x-coordinate of the rightmost
//! point of its left half, and `delta = min(left.d, right.d)`, only points with
//! `|x - split_x| < delta` can form a closer cross pair. Inside that strip each
//! point needs comparing against at most the next `STRIP_WINDOW` points in y
//! order (packing argument on the 2·delta wide strip).
//!
//! Edge cases
//! - Coincident points give `delta == 0`, so the strict filter keeps nothing.
//! - A single surviving candidate cannot form a pair.
//! Both return `PairResult::none()`.

use crate::geom::{distance, IndexedPoint, PairResult};

/// Number of y-successors each strip candidate is compared against.
pub const STRIP_WINDOW: usize = 15;

/// Points of `ys` strictly closer than `delta` to the vertical line `x = split_x`,
/// in the same (y) order. Never mutates `ys`.
pub fn strip_candidates(ys: &[IndexedPoint], split_x: f64, delta: f64) -> Vec<IndexedPoint> {
    ys.iter()
        .filter(|e| (e.p.x - split_x).abs() < delta)
        .copied()
        .collect()
}

/// Closest pair among y-sorted candidates, each compared with its next
/// `STRIP_WINDOW` neighbours. The first strictly smaller distance wins.
pub fn closest_in_strip(candidates: &[IndexedPoint]) -> PairResult {
    let mut best = PairResult::none();
    if candidates.len() < 2 {
        return best;
    }
    for (i, a) in candidates.iter().enumerate() {
        let end = candidates.len().min(i + 1 + STRIP_WINDOW);
        for b in &candidates[i + 1..end] {
            let d = distance(a.p, b.p);
            if d < best.distance {
                best = PairResult {
                    p1: a.p,
                    p2: b.p,
                    distance: d,
                };
            }
        }
    }
    best
}

/// Filter then scan: the cross-boundary candidate for one merge.
pub fn merge_across(ys: &[IndexedPoint], split_x: f64, delta: f64) -> PairResult {
    let candidates = strip_candidates(ys, split_x, delta);
    tracing::trace!(len = ys.len(), candidates = candidates.len(), "strip");
    closest_in_strip(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn e(x: f64, y: f64, pos: usize) -> IndexedPoint {
        IndexedPoint::new(vector![x, y], pos)
    }

    fn row() -> Vec<IndexedPoint> {
        vec![e(1.0, 2.0, 0), e(4.0, 2.0, 3), e(3.0, 2.0, 2), e(2.0, 2.0, 1)]
    }

    #[test]
    fn candidates_keep_y_order_and_strict_bound() {
        let c = strip_candidates(&row(), 2.0, 1.5);
        assert_eq!(c, vec![e(1.0, 2.0, 0), e(3.0, 2.0, 2), e(2.0, 2.0, 1)]);
        // |x - 2| == 1 is excluded at delta == 1
        let c = strip_candidates(&row(), 2.0, 1.0);
        assert_eq!(c, vec![e(2.0, 2.0, 1)]);
    }

    #[test]
    fn only_reference_point_survives_small_delta() {
        let c = strip_candidates(&row(), 2.0, 0.5);
        assert_eq!(c, vec![e(2.0, 2.0, 1)]);
        assert!(closest_in_strip(&c).is_none());
    }

    #[test]
    fn zero_delta_yields_sentinel() {
        // Coincident points upstream collapse delta to 0.
        let r = merge_across(&row(), 2.0, 0.0);
        assert!(r.is_none());
        assert!(closest_in_strip(&[]).is_none());
    }

    #[test]
    fn window_limits_comparisons() {
        // Column of points 10 apart in y plus one extra point near the bottom.
        let mut ys: Vec<IndexedPoint> = (0..17).map(|i| e(0.0, i as f64 * 10.0, i)).collect();
        ys[16] = e(0.0, 0.5, 16);
        ys.sort_by(|a, b| a.p.y.total_cmp(&b.p.y));
        // After sorting, (0,0) and (0,0.5) are adjacent: found.
        let r = closest_in_strip(&ys);
        assert!((r.distance - 0.5).abs() < 1e-12);

        // A close pair 17 positions apart is outside the window.
        let mut far: Vec<IndexedPoint> = (0..16).map(|i| e(0.0, 100.0 + i as f64 * 10.0, i)).collect();
        far.insert(0, e(0.0, 0.0, 99));
        far.push(e(0.0, 0.1, 100));
        assert_eq!(far.len(), 18);
        let r = closest_in_strip(&far);
        assert!((r.distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn finds_cross_pair() {
        let ys = vec![e(0.0, 0.0, 0), e(0.9, 0.1, 1), e(1.1, 0.2, 2), e(3.0, 5.0, 3)];
        let r = merge_across(&ys, 0.9, 1.0);
        assert!(r.same_points(vector![0.9, 0.1], vector![1.1, 0.2]));
        assert!(r.distance < 1.0);
    }
}
