//! Fork-based failure interception for hosted Unix targets.
//!
//! Runs each operation in a short-lived child process and maps the child's
//! exit status to the boolean outcome. This contains failure classes the
//! unwinding backend cannot: aborts, memory faults, any signal death. The
//! cost is one `fork(2)` per operation, and state a test operation mutates
//! is lost with the child.
//!
//! Select it per run with [`run_with`](crate::run_with):
//!
//! ```no_run
//! use picotest::{Fixture, RunResult, catching};
//!
//! fn hard_crash() {
//!     std::process::abort();
//! }
//!
//! static FIXTURE: Fixture = Fixture::new(&[hard_crash]);
//!
//! let mut result = RunResult::new();
//! picotest::run_with(&[&FIXTURE], &mut result, catching::forked::run_catching);
//! assert_eq!(result.failure_count, 1);
//! ```

use std::io;

use crate::catching::unwind;
use crate::fixture::TestOp;

/// Invoke `op` once in a forked child, intercepting any failure that kills
/// only the child.
///
/// Returns `true` iff the child ran `op` to completion and exited cleanly.
/// An intercepted [`fail`](crate::fail), a panic, an abort, and a signal
/// death all report `false`. If `fork(2)` itself fails, the operation runs
/// in-process through the unwinding wrapper instead, so it is still invoked
/// exactly once.
pub fn run_catching(op: TestOp) -> bool {
    // SAFETY: fork has no preconditions; the child runs only the operation
    // and leaves via _exit without touching the parent's state.
    match unsafe { libc::fork() } {
        -1 => {
            log::warn!("fork failed, falling back to in-process catching");
            unwind::run_catching(op)
        }
        0 => {
            let ok = unwind::run_catching(op);
            // _exit instead of exit: no atexit handlers, no stdio flushing
            // racing with the parent.
            unsafe { libc::_exit(if ok { 0 } else { 1 }) }
        }
        child => wait_for(child),
    }
}

/// Reap the child and map its exit status to the operation outcome.
fn wait_for(child: libc::pid_t) -> bool {
    let mut status: libc::c_int = 0;
    loop {
        // SAFETY: waitpid writes the status through a valid pointer.
        let rc = unsafe { libc::waitpid(child, &mut status, 0) };
        if rc == child {
            return libc::WIFEXITED(status) && libc::WEXITSTATUS(status) == 0;
        }
        if rc == -1 && io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
            // Lost track of the child; the operation cannot be claimed
            // successful.
            return false;
        }
    }
}
