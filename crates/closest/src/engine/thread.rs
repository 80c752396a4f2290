//! Thread-parallel engine: one scoped OS thread per left half above the
//! threshold, a blocking join as the rendezvous.

use std::thread;

use super::{combine, sequential, Split, Subproblem};
use crate::error::SolveError;
use crate::geom::PairResult;

/// Returns the pair and the number of threads spawned in this subtree.
pub(crate) fn closest(
    sub: Subproblem<'_>,
    threshold: usize,
) -> Result<(PairResult, usize), SolveError> {
    if sub.len() == 2 {
        return Ok((sub.base_pair(), 0));
    }
    if sub.len() <= threshold {
        return Ok((sequential::closest(sub), 0));
    }
    let Split {
        left,
        right,
        split_x,
    } = sub.split();
    tracing::debug!(n = sub.len(), threshold, "thread fan-out");

    let (l, r) = thread::scope(|s| -> Result<_, SolveError> {
        let handle = thread::Builder::new()
            .name("closest-left".to_string())
            .spawn_scoped(s, move || closest(left, threshold))?;
        let r = closest(right, threshold);
        // Join before looking at `r` so a failed right half never leaves the
        // left worker unjoined.
        let l = handle.join().map_err(|_| SolveError::ThreadJoin)?;
        Ok((l?, r?))
    })?;

    Ok((combine(&sub.ys, split_x, l.0, r.0), l.1 + r.1 + 1))
}
