//! Failure primitive and catching execution wrappers.
//!
//! Every hook and test case the runner executes goes through
//! [`run_catching`], which converts a divergent [`fail`] into a boolean
//! outcome. What is intercepted depends on the backend:
//! - `unwind` (hosted, `std`): intercepts unwinding panics
//! - `forked` (hosted Unix, `fork`): child process per operation, contains
//!   aborts and signals too
//! - `simple` (freestanding): intercepts nothing; a failure is fatal
//!
//! All backends share one guarantee: `run_catching` returns `true` only on
//! genuine normal completion of the operation.

#[cfg(all(feature = "fork", unix))]
pub mod forked;
#[cfg(not(feature = "std"))]
mod simple;
#[cfg(feature = "std")]
pub mod unwind;

#[cfg(not(feature = "std"))]
pub use simple::{fail, run_catching};
#[cfg(feature = "std")]
pub use unwind::{fail, run_catching};
