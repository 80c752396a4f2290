//! Fork-join on the rayon pool. Same recursion and threshold as the thread
//! engine, but left halves become stealable tasks instead of dedicated threads.

use super::{combine, sequential, Split, Subproblem};
use crate::geom::PairResult;

pub(crate) fn closest(sub: Subproblem<'_>, threshold: usize) -> (PairResult, usize) {
    if sub.len() == 2 {
        return (sub.base_pair(), 0);
    }
    if sub.len() <= threshold {
        return (sequential::closest(sub), 0);
    }
    let Split {
        left,
        right,
        split_x,
    } = sub.split();
    let ((l, lw), (r, rw)) = rayon::join(
        || closest(left, threshold),
        || closest(right, threshold),
    );
    (combine(&sub.ys, split_x, l, r), lw + rw + 1)
}
