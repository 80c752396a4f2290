//! Error taxonomy for `solve` and the oracle.
//!
//! Every variant is fatal to the call that produced it: no partial geometric
//! result is returned. Callers that want a fallback re-invoke `solve` with
//! `Strategy::Sequential` or a larger threshold.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    /// Precondition violation: the engines need at least two points.
    #[error("closest pair needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    /// Shared mapping, fork, or wait failed, or a child exited abnormally.
    #[error("process strategy failed: {0}")]
    Process(String),
    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
    /// A worker thread panicked before handing back its result.
    #[error("worker thread panicked")]
    ThreadJoin,
}

/// Fail fast on inputs the engines cannot handle.
pub(crate) fn ensure_min_len(len: usize) -> Result<(), SolveError> {
    if len < 2 {
        return Err(SolveError::TooFewPoints { len });
    }
    Ok(())
}
