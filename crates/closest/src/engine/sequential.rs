//! Sequential reference engine.

use super::{combine, Split, Subproblem};
use crate::geom::PairResult;

/// Solve a subproblem on the current thread.
pub(crate) fn closest(sub: Subproblem<'_>) -> PairResult {
    if sub.len() == 2 {
        return sub.base_pair();
    }
    let Split {
        left,
        right,
        split_x,
    } = sub.split();
    let l = closest(left);
    let r = closest(right);
    combine(&sub.ys, split_x, l, r)
}
