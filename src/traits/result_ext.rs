//! Extension trait for lifting standard `Result` values into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let outcome =
//!     std::fs::read_to_string("does-not-exist.toml").outcome_ctx("loading configuration");
//!
//! assert!(outcome.is_failure());
//! assert!(outcome.exception_or_none().is_some_and(|e| e.is::<std::io::Error>()));
//! ```

use crate::outcome::Outcome;
use crate::traits::IntoContext;
use crate::types::LazyContext;
use std::any::Any;
use std::fmt::Display;

/// Extension trait converting `Result<T, E>` into [`Outcome<T>`].
///
/// The `Err` value becomes the wrapped error of a [`CaughtError`](crate::CaughtError),
/// keeping its concrete type for later downcasting.
pub trait ResultExt<T, E> {
    /// Converts into an outcome without adding context.
    fn into_outcome(self) -> Outcome<T>;

    /// Converts into an outcome, attaching `context` to a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// let outcome = result.outcome_ctx("performing operation");
    /// assert_eq!(
    ///     outcome.exception_or_none().map(|e| e.error_chain()),
    ///     Some("performing operation -> failed".to_string())
    /// );
    /// ```
    fn outcome_ctx<C: IntoContext>(self, context: C) -> Outcome<T>;

    /// Converts into an outcome, attaching a lazily built context to a failure.
    ///
    /// The closure is only called if the `Result` is an `Err`.
    fn outcome_ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Any + Send + Display,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_result(self)
    }

    #[inline]
    fn outcome_ctx<C: IntoContext>(self, context: C) -> Outcome<T> {
        Outcome::from_result(self).context(context)
    }

    #[inline]
    fn outcome_ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        Outcome::from_result(self).context(LazyContext::new(f))
    }
}
