//! End-to-end self-test for the picotest runner.
//!
//! Builds a small suite of static fixtures, one with a deliberately failing
//! test case, runs it twice into one accumulated result, and verifies the
//! final counters and hook invocations. Exits nonzero if any expectation
//! does not hold, so the binary can gate CI.

use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Result, ensure};
use picotest::{Fixture, RunResult, check, run};

static SETUP_CALLS: AtomicU32 = AtomicU32::new(0);
static TEARDOWN_CALLS: AtomicU32 = AtomicU32::new(0);

fn setup() {
    SETUP_CALLS.fetch_add(1, Ordering::Relaxed);
}

fn teardown() {
    TEARDOWN_CALLS.fetch_add(1, Ordering::Relaxed);
}

fn adds_up() {
    check!(2 + 2 == 4);
}

fn wraps_around() {
    check!(255u8.wrapping_add(1) == 0);
}

fn always_fails() {
    // Deliberate failure: exercises interception and the failure counter.
    check!(1 > 2);
}

static ARITHMETIC: Fixture = Fixture::new(&[adds_up, wraps_around])
    .with_before_each(setup)
    .with_after_each(teardown);

static FAILING: Fixture = Fixture::new(&[always_fails]);

fn main() -> Result<()> {
    env_logger::init();

    let fixtures: [&Fixture; 2] = [&ARITHMETIC, &FAILING];
    let mut result = RunResult::new();

    run(&fixtures, &mut result);
    log::info!("first pass: {result}");

    // Second pass accumulates into the same result.
    run(&fixtures, &mut result);
    println!("{result}");

    let expected = RunResult {
        test_case_count: 6,
        success_count: 4,
        failure_count: 2,
    };
    ensure!(
        result == expected,
        "unexpected counters: got {result}, expected {expected}"
    );

    let setup_calls = SETUP_CALLS.load(Ordering::Relaxed);
    ensure!(setup_calls == 4, "before_each ran {setup_calls} times, expected 4");

    let teardown_calls = TEARDOWN_CALLS.load(Ordering::Relaxed);
    ensure!(
        teardown_calls == 4,
        "after_each ran {teardown_calls} times, expected 4"
    );

    Ok(())
}
