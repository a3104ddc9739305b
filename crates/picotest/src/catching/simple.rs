//! Freestanding execution without failure interception.
//!
//! The minimal backend for targets with no unwinding support. Nothing is
//! intercepted: [`run_catching`] reports `true` only when the operation ran
//! to normal completion, and a failing operation never returns here; the
//! target's panic handler owns it (typically an abort or a reset). A
//! failing test operation is therefore fatal to the whole run.

use crate::fixture::TestOp;

/// Abort the current test operation.
///
/// Diverges into the target's panic handler; control never returns to the
/// runner for this operation.
pub fn fail() -> ! {
    panic!("test operation failed");
}

/// Invoke `op` once. Returns `true` only when it completed normally; a
/// failing operation does not return at all.
pub fn run_catching(op: TestOp) -> bool {
    op();
    true
}
