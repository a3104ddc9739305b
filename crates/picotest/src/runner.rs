//! Fixture iteration and result aggregation.

use crate::catching::run_catching;
use crate::fixture::{Fixture, TestOp};
use crate::result::RunResult;

/// Run every fixture in list order, accumulating counts into `result`.
///
/// `result` is not zeroed; repeated calls accumulate, so one result can
/// collect several suites. Every hook and test case executes through the
/// default catching wrapper: a failing hook or test case is counted and the
/// run continues with the next step. A failing `before_all` or
/// `before_each` does not skip anything; the full prescribed sequence is
/// always executed and every failure is counted independently.
///
/// Per fixture: `before_all` once, then for each test case `before_each`,
/// the test case itself, `after_each` (even when the case failed), and
/// finally `after_all` once (even when cases failed).
pub fn run(fixtures: &[&Fixture], result: &mut RunResult) {
    run_with(fixtures, result, run_catching);
}

/// Like [`run`], but executing every operation through `wrapper`.
///
/// `wrapper` must uphold the catching contract: invoke the operation
/// exactly once and return `true` only on normal completion. Use this to
/// select another interception backend per run, e.g.
/// `catching::forked::run_catching` for per-operation process isolation.
pub fn run_with(fixtures: &[&Fixture], result: &mut RunResult, wrapper: fn(TestOp) -> bool) {
    log::debug!("running {} fixtures", fixtures.len());

    for fixture in fixtures {
        run_fixture(fixture, result, wrapper);
    }

    log::debug!(
        "run finished: {} test cases, {} passed, {} failures",
        result.test_case_count,
        result.success_count,
        result.failure_count
    );
}

fn run_fixture(fixture: &Fixture, result: &mut RunResult, wrapper: fn(TestOp) -> bool) {
    if let Some(before_all) = fixture.before_all {
        if !wrapper(before_all) {
            result.failure_count += 1;
        }
    }

    for &test in fixture.tests {
        if let Some(before_each) = fixture.before_each {
            if !wrapper(before_each) {
                result.failure_count += 1;
            }
        }

        result.test_case_count += 1;
        if wrapper(test) {
            result.success_count += 1;
        } else {
            result.failure_count += 1;
        }

        // Teardown guarantee: after_each runs even when the case failed.
        if let Some(after_each) = fixture.after_each {
            if !wrapper(after_each) {
                result.failure_count += 1;
            }
        }
    }

    // Symmetric with before_all: after_all runs regardless of failures.
    if let Some(after_all) = fixture.after_all {
        if !wrapper(after_all) {
            result.failure_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::fail;

    fn passing() {}

    fn failing() {
        fail();
    }

    #[test]
    fn test_counts_passing_and_failing_cases() {
        static FIXTURE: Fixture = Fixture::new(&[passing, failing, passing]);

        let mut result = RunResult::new();
        run(&[&FIXTURE], &mut result);

        assert_eq!(result.test_case_count, 3);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 1);
    }

    #[test]
    fn test_empty_fixture_list_counts_nothing() {
        let mut result = RunResult::new();
        run(&[], &mut result);
        assert_eq!(result, RunResult::new());
    }

    #[test]
    fn test_absent_hooks_contribute_nothing() {
        static FIXTURE: Fixture = Fixture::new(&[passing]);

        let mut result = RunResult::new();
        run(&[&FIXTURE], &mut result);

        assert_eq!(result.test_case_count, 1);
        assert_eq!(result.success_count, 1);
        assert_eq!(result.failure_count, 0);
    }

    #[test]
    fn test_each_hooks_observe_every_case() {
        static BEFORE: AtomicU32 = AtomicU32::new(0);
        static AFTER: AtomicU32 = AtomicU32::new(0);

        fn before_each() {
            BEFORE.fetch_add(1, Ordering::Relaxed);
        }
        fn after_each() {
            AFTER.fetch_add(1, Ordering::Relaxed);
        }

        static FIXTURE: Fixture = Fixture::new(&[passing, failing])
            .with_before_each(before_each)
            .with_after_each(after_each);

        let mut result = RunResult::new();
        run(&[&FIXTURE], &mut result);

        // after_each ran for the failing case too.
        assert_eq!(BEFORE.load(Ordering::Relaxed), 2);
        assert_eq!(AFTER.load(Ordering::Relaxed), 2);
        assert_eq!(result.failure_count, 1);
    }

    #[test]
    fn test_failing_hook_counts_without_skipping() {
        static CASES_RUN: AtomicU32 = AtomicU32::new(0);

        fn counted_case() {
            CASES_RUN.fetch_add(1, Ordering::Relaxed);
        }

        static FIXTURE: Fixture =
            Fixture::new(&[counted_case, counted_case]).with_before_each(failing);

        let mut result = RunResult::new();
        run(&[&FIXTURE], &mut result);

        // Both cases still attempted; each hook failure counted on its own.
        assert_eq!(CASES_RUN.load(Ordering::Relaxed), 2);
        assert_eq!(result.test_case_count, 2);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 2);
    }
}
