//! Ergonomic macros for building [`Outcome`](crate::Outcome) values.
//!
//! - [`macro@crate::catching`] - Runs a block through
//!   [`Outcome::run_catching`](crate::Outcome::run_catching).
//! - [`macro@crate::failure`] - Builds a failure from a `format!`-style message.
//! - [`macro@crate::context`] - Defers formatting of a context message until a
//!   failure consumes it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{catching, context, failure, Outcome};
//!
//! let attempt = 3;
//! let outcome: Outcome<u32> = catching!({
//!     let parts: Vec<u32> = vec![1, 2];
//!     parts[attempt]
//! })
//! .context(context!("attempt {}", attempt));
//! assert!(outcome.is_failure());
//!
//! let rejected: Outcome<()> = failure!("limit {} exceeded", 10);
//! assert_eq!(
//!     rejected.exception_or_none().map(|e| e.message()),
//!     Some("limit 10 exceeded".to_string())
//! );
//! ```

/// Runs an expression or block, capturing a panic into a failure.
///
/// # Syntax
///
/// - `catching!(expr)` - Wraps a single expression
/// - `catching!({ ... })` - Wraps a block
///
/// # Examples
///
/// ```rust
/// use outcome_rail::catching;
///
/// let ok = catching!(21 * 2);
/// assert_eq!(ok.into_value(), Some(42));
///
/// let failed = catching!({
///     let empty: Vec<i32> = Vec::new();
///     empty[0]
/// });
/// assert!(failed.is_failure());
/// ```
#[macro_export]
macro_rules! catching {
    ($expr:expr $(,)?) => {
        $crate::Outcome::run_catching(|| $expr)
    };
}

/// Creates a failure whose error is a formatted `String`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let user_id = 42;
/// let outcome: Outcome<()> = failure!("user {} not found", user_id);
/// assert_eq!(
///     outcome.exception_or_none().and_then(|e| e.downcast_ref::<String>()).map(String::as_str),
///     Some("user 42 not found")
/// );
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::Outcome::failure(format!($($arg)*))
    };
}

/// Creates a lazily-evaluated context message.
///
/// Wraps the format string and arguments in a [`LazyContext`](crate::types::LazyContext),
/// which only formats when attached to a failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{context, CaughtError};
///
/// let user_id = 42;
/// let err = CaughtError::new("auth failed").with_context(context!("user_id: {}", user_id));
/// assert_eq!(err.error_chain(), "user_id: 42 -> auth failed");
/// ```
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::types::LazyContext::new(move || format!($($arg)*))
    };
}
