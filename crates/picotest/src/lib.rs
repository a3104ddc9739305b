//! Minimal fixture-based test runner.
//!
//! Runs ordered lists of test fixtures, invoking per-fixture and per-test
//! lifecycle hooks around each test case, isolating failures so that one
//! failing case cannot abort the whole run, and accumulating pass/fail
//! counts. It includes:
//! - Fixture and result data model ([`Fixture`], [`RunResult`])
//! - Sequential runner with lifecycle ordering and teardown guarantees
//! - Failure primitive and catching wrappers ([`fail`], [`run_catching`])
//! - [`check!`](crate::check!) assertion macro layered on the failure
//!   primitive
//!
//! The crate is `no_std` so suites can run on freestanding targets; the
//! `std` feature (on by default) enables the unwinding-based failure
//! interception used on hosted systems, and the `fork` feature adds
//! per-operation process isolation on Unix.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catching;
pub mod check;
pub mod fixture;
pub mod result;
pub mod runner;

// Re-exports for convenience
pub use catching::{fail, run_catching};
pub use fixture::{Fixture, TestOp};
pub use result::RunResult;
pub use runner::{run, run_with};
