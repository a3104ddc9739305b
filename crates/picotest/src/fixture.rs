//! Fixture and test-operation data model.

/// A single test operation.
///
/// Used uniformly for test cases and for the four lifecycle hooks. A test
/// operation takes no arguments and returns nothing; it reports failure by
/// calling [`fail`](crate::fail), usually through the
/// [`check!`](crate::check!) macro. Identity is the function address.
pub type TestOp = fn();

/// An ordered group of test cases with optional lifecycle hooks.
///
/// A fixture is fixed at construction and never mutated by the runner. An
/// absent hook means "skip this step". Construction is `const`, so fixture
/// tables can live in `static`s the way suites on freestanding targets are
/// laid out:
///
/// ```
/// use picotest::Fixture;
///
/// fn reset_state() {}
/// fn smoke() {}
///
/// static FIXTURE: Fixture = Fixture::new(&[smoke]).with_before_each(reset_state);
///
/// assert_eq!(FIXTURE.tests.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Run once per fixture, before anything else.
    pub before_all: Option<TestOp>,
    /// Run once per fixture, after everything else, even if test cases failed.
    pub after_all: Option<TestOp>,
    /// Run immediately before every test case.
    pub before_each: Option<TestOp>,
    /// Run immediately after every test case, even if it failed.
    pub after_each: Option<TestOp>,
    /// Test cases, in execution order. A well-formed fixture has at least one.
    pub tests: &'static [TestOp],
}

impl Fixture {
    /// Create a fixture with the given test cases and no lifecycle hooks.
    pub const fn new(tests: &'static [TestOp]) -> Self {
        Fixture {
            before_all: None,
            after_all: None,
            before_each: None,
            after_each: None,
            tests,
        }
    }

    /// Set the hook run once before any test case.
    pub const fn with_before_all(mut self, op: TestOp) -> Self {
        self.before_all = Some(op);
        self
    }

    /// Set the hook run once after all test cases.
    pub const fn with_after_all(mut self, op: TestOp) -> Self {
        self.after_all = Some(op);
        self
    }

    /// Set the hook run before every test case.
    pub const fn with_before_each(mut self, op: TestOp) -> Self {
        self.before_each = Some(op);
        self
    }

    /// Set the hook run after every test case.
    pub const fn with_after_each(mut self, op: TestOp) -> Self {
        self.after_each = Some(op);
        self
    }
}
