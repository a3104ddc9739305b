//! Assertion macro layered on the failure primitive.

/// Assert a condition inside a test operation.
///
/// On a false condition, hosted (`std`) builds print a diagnostic naming
/// the file, line, enclosing function, and the condition's source text to
/// stderr, then call [`fail`](crate::fail). Freestanding builds emit no
/// diagnostic; only `fail` is invoked.
///
/// ```
/// fn wraps_around() {
///     picotest::check!(255u8.wrapping_add(1) == 0);
/// }
///
/// assert!(picotest::run_catching(wraps_around));
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr) => {{
        if !($cond) {
            fn here() {}
            fn name_of<T>(_: T) -> &'static str {
                ::core::any::type_name::<T>()
            }
            $crate::check::check_failed(
                ::core::file!(),
                ::core::line!(),
                name_of(here).trim_end_matches("::here"),
                ::core::stringify!($cond),
            );
        }
    }};
}

/// Print the hosted diagnostic for a failed check, then abort the current
/// test operation. Implementation detail of [`check!`](crate::check!).
#[doc(hidden)]
pub fn check_failed(file: &str, line: u32, func: &str, cond: &str) -> ! {
    #[cfg(feature = "std")]
    std::eprintln!("{file}:{line}: {func}: check `{cond}` failed");

    // Suppress unused parameter warnings when no diagnostic stream exists
    #[cfg(not(feature = "std"))]
    let _ = (file, line, func, cond);

    crate::catching::fail()
}
