//! Strategy selection for `solve`.
//!
//! Policy
//! - `threshold` is a subproblem size: a parallel strategy fans out only while
//!   the current size exceeds it, then hands the subtree to the sequential
//!   engine. `threshold >= n` therefore never spawns a worker.
//! - `threshold_for_workers` reproduces the "number of workers" knob: with
//!   `w` workers the threshold is `ceil(n / w)`.

/// Execution strategy for one `solve` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded recursion; the reference for every other strategy.
    #[default]
    Sequential,
    /// Fork an OS process for each left half while size > `threshold` (unix only).
    Process { threshold: usize },
    /// Spawn an OS thread for each left half while size > `threshold`.
    Thread { threshold: usize },
    /// `rayon::join` on the global pool while size > `threshold`.
    Pool { threshold: usize },
}

impl Strategy {
    /// Fan-out threshold, `None` for `Sequential`.
    pub fn threshold(&self) -> Option<usize> {
        match *self {
            Strategy::Sequential => None,
            Strategy::Process { threshold }
            | Strategy::Thread { threshold }
            | Strategy::Pool { threshold } => Some(threshold),
        }
    }

    /// Short lowercase name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "seq",
            Strategy::Process { .. } => "proc",
            Strategy::Thread { .. } => "thread",
            Strategy::Pool { .. } => "pool",
        }
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveCfg {
    pub strategy: Strategy,
}

impl SolveCfg {
    #[inline]
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
    #[inline]
    pub fn sequential() -> Self {
        Self::new(Strategy::Sequential)
    }
    #[inline]
    pub fn process(threshold: usize) -> Self {
        Self::new(Strategy::Process { threshold })
    }
    #[inline]
    pub fn thread(threshold: usize) -> Self {
        Self::new(Strategy::Thread { threshold })
    }
    #[inline]
    pub fn pool(threshold: usize) -> Self {
        Self::new(Strategy::Pool { threshold })
    }
}

/// Size threshold that spreads `len` points over roughly `workers` workers.
/// `workers == 0` is treated as 1.
pub fn threshold_for_workers(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1))
}

/// Per-call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Processes, threads, or pool tasks forked for left halves, over the
    /// whole recursion tree.
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workers_to_threshold_rounds_up() {
        assert_eq!(threshold_for_workers(1000, 8), 125);
        assert_eq!(threshold_for_workers(1001, 8), 126);
        assert_eq!(threshold_for_workers(10, 0), 10);
        assert_eq!(threshold_for_workers(3, 16), 1);
    }

    #[test]
    fn strategy_accessors() {
        assert_eq!(SolveCfg::default().strategy, Strategy::Sequential);
        assert_eq!(Strategy::Sequential.threshold(), None);
        assert_eq!(SolveCfg::thread(64).strategy.threshold(), Some(64));
        assert_eq!(SolveCfg::process(8).strategy.name(), "proc");
        assert_eq!(SolveCfg::pool(8).strategy.name(), "pool");
    }
}
