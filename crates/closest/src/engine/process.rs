//! Process-parallel engine (unix).
//!
//! Above the threshold each split forks: the child solves the left half and
//! writes a `Handoff` into a one-slot anonymous `MAP_SHARED` mapping, then
//! `_exit`s; the parent solves the right half, reaps the child with
//! `waitpid`, and only then reads the slot. The slot is written exactly once
//! and read exactly once, after the wait, so it needs no further
//! synchronization.
//!
//! Failure policy
//! - mmap/fork/wait errors, and any child status other than `Exited(0)`, fail
//!   the whole call with `SolveError::Process`.
//! - A child never returns into the caller's stack: errors and panics inside
//!   it are turned into a nonzero exit code.

use std::ffi::c_void;
use std::mem::size_of;
use std::num::NonZeroUsize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::NonNull;

use nix::errno::Errno;
use nix::sys::mman::{mmap_anonymous, munmap, MapFlags, ProtFlags};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};

use super::{combine, sequential, Split, Subproblem};
use crate::error::SolveError;
use crate::geom::PairResult;

/// Exit code of a child whose subtree failed or panicked.
const CHILD_FAILED: i32 = 70;

/// What the child hands back to its parent.
#[derive(Clone, Copy, Debug)]
struct Handoff {
    pair: PairResult,
    workers: usize,
}

/// A single `T` in memory shared with forked children.
struct SharedSlot<T: Copy> {
    ptr: NonNull<T>,
}

impl<T: Copy> SharedSlot<T> {
    fn new() -> Result<Self, SolveError> {
        let len = NonZeroUsize::new(size_of::<T>())
            .ok_or_else(|| SolveError::Process("zero-sized shared slot".to_string()))?;
        // SAFETY: fresh anonymous mapping, no existing memory is aliased.
        let ptr = unsafe {
            mmap_anonymous(
                None,
                len,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
            )
        }
        .map_err(|e| SolveError::Process(format!("mmap shared slot: {e}")))?;
        Ok(Self { ptr: ptr.cast() })
    }

    /// Child side; called at most once.
    fn write(&self, value: T) {
        // SAFETY: the mapping is page aligned and at least size_of::<T>() long.
        unsafe { self.ptr.as_ptr().write(value) }
    }

    /// Parent side; only valid after the child has exited successfully.
    fn read(&self) -> T {
        // SAFETY: the child wrote a complete `T` before `_exit(0)`.
        unsafe { self.ptr.as_ptr().read() }
    }
}

impl<T: Copy> Drop for SharedSlot<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from mmap with this length and is unmapped once.
        if let Err(e) = unsafe { munmap(self.ptr.cast::<c_void>(), size_of::<T>()) } {
            tracing::warn!(error = %e, "munmap shared slot");
        }
    }
}

/// Returns the pair and the number of processes forked in this subtree.
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
    tracing::debug!(n = sub.len(), threshold, "process fan-out");

    let slot = SharedSlot::<Handoff>::new()?;
    // SAFETY: the child only runs the recursion below and leaves via `_exit`,
    // never unwinding into or returning to code that assumes a single process.
    let child = match unsafe { fork() } {
        Ok(ForkResult::Child) => run_child(left, threshold, &slot),
        Ok(ForkResult::Parent { child }) => child,
        Err(e) => return Err(SolveError::Process(format!("fork: {e}"))),
    };
    drop(left);

    let r = closest(right, threshold);
    let waited = wait_child(child);
    let (r, rw) = r?;
    waited?;
    let Handoff { pair: l, workers: lw } = slot.read();

    Ok((combine(&sub.ys, split_x, l, r), lw + rw + 1))
}

fn run_child(left: Subproblem<'_>, threshold: usize, slot: &SharedSlot<Handoff>) -> ! {
    let code = match catch_unwind(AssertUnwindSafe(|| closest(left, threshold))) {
        Ok(Ok((pair, workers))) => {
            slot.write(Handoff { pair, workers });
            0
        }
        _ => CHILD_FAILED,
    };
    // SAFETY: `_exit` skips atexit handlers and destructors inherited from the
    // parent, which is what a forked worker must do.
    unsafe { nix::libc::_exit(code) }
}

fn wait_child(child: Pid) -> Result<(), SolveError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, 0)) => return Ok(()),
            Ok(status) => {
                return Err(SolveError::Process(format!(
                    "child {child} ended with {status:?}"
                )))
            }
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(SolveError::Process(format!("waitpid {child}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn slot_survives_fork() {
        let slot = SharedSlot::<Handoff>::new().unwrap();
        let sent = Handoff {
            pair: PairResult::of(vector![1.0, 2.0], vector![4.0, 6.0]),
            workers: 3,
        };
        match unsafe { fork() }.unwrap() {
            ForkResult::Child => {
                slot.write(sent);
                unsafe { nix::libc::_exit(0) }
            }
            ForkResult::Parent { child } => {
                wait_child(child).unwrap();
                let got = slot.read();
                assert_eq!(got.pair, sent.pair);
                assert_eq!(got.workers, 3);
                assert!((got.pair.distance - 5.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn failed_child_is_fatal() {
        match unsafe { fork() }.unwrap() {
            ForkResult::Child => unsafe { nix::libc::_exit(CHILD_FAILED) },
            ForkResult::Parent { child } => {
                let err = wait_child(child).unwrap_err();
                assert!(matches!(err, SolveError::Process(_)));
            }
        }
    }
}
