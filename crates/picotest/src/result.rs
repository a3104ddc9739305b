//! Run result accumulation.

use core::fmt;

/// Aggregate counters for one or more runs.
///
/// The caller owns and initializes the record; the runner only ever
/// increments the counters, never resets them. Running again with the same
/// result collects several suites into one total.
///
/// `success_count` never exceeds `test_case_count`. `failure_count` counts
/// distinct failure events: a failing test case and a failing hook around
/// it both count, so it is not bounded by `test_case_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Test cases attempted.
    pub test_case_count: u32,
    /// Test cases that completed without failure.
    pub success_count: u32,
    /// Failures observed in test cases and in lifecycle hooks.
    pub failure_count: u32,
}

impl RunResult {
    /// Create a zeroed result.
    pub const fn new() -> Self {
        RunResult {
            test_case_count: 0,
            success_count: 0,
            failure_count: 0,
        }
    }

    /// Whether no failure has been recorded.
    pub const fn all_passed(&self) -> bool {
        self.failure_count == 0
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} test cases, {} passed, {} failures",
            self.test_case_count, self.success_count, self.failure_count
        )
    }
}
