//! Unwinding-based failure interception for hosted targets.
//!
//! [`fail`] unwinds with a private sentinel payload and [`run_catching`]
//! intercepts it with `catch_unwind`. Any other unwinding panic is
//! intercepted the same way. Aborting conditions (`panic = "abort"` builds,
//! stack overflow, fatal signals) are not intercepted and terminate the run.

use std::boxed::Box;
use std::panic;
use std::sync::Once;

use crate::fixture::TestOp;

/// Panic payload distinguishing an explicit [`fail`] from other panics.
struct FailSignal;

static QUIET_HOOK: Once = Once::new();

/// Suppress the default panic banner for [`FailSignal`] payloads.
///
/// The diagnostic for a failed check is printed before [`fail`] unwinds, so
/// the hook only forwards payloads that did not come from the failure
/// primitive. Other panics still reach the previously installed hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().downcast_ref::<FailSignal>().is_none() {
                previous(info);
            }
        }));
    });
}

/// Abort the test operation currently running under [`run_catching`].
///
/// Unwinds out of the operation without returning. Calling it outside of a
/// wrapped operation unwinds into whatever frame catches panics next; no
/// contract is given for that case.
pub fn fail() -> ! {
    panic::panic_any(FailSignal)
}

/// Invoke `op` once, intercepting unwinding panics.
///
/// Returns `true` iff `op` ran to normal completion. An explicit [`fail`]
/// and any other unwinding panic both report `false`.
pub fn run_catching(op: TestOp) -> bool {
    install_quiet_hook();
    panic::catch_unwind(op).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completes() {}

    fn fails() {
        fail();
    }

    fn panics() {
        panic!("not via the failure primitive");
    }

    #[test]
    fn test_normal_completion_reports_true() {
        assert!(run_catching(completes));
    }

    #[test]
    fn test_fail_is_intercepted() {
        assert!(!run_catching(fails));
    }

    #[test]
    fn test_other_panics_are_intercepted() {
        assert!(!run_catching(panics));
    }

    #[test]
    fn test_wrapper_state_survives_failures() {
        // Interception must not corrupt subsequent invocations.
        assert!(!run_catching(fails));
        assert!(run_catching(completes));
        assert!(!run_catching(fails));
        assert!(run_catching(completes));
    }
}
