//! Deferred context generation for failure annotation.
//!
//! [`LazyContext`] delays building a context string until a failure actually
//! needs it, so the formatting cost is never paid on the success path.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{LazyContext, Outcome};
//!
//! fn expensive_debug_info() -> String {
//!     format!("computed value: {}", 42)
//! }
//!
//! let outcome = Outcome::<()>::failure("failed").context(LazyContext::new(expensive_debug_info));
//! assert_eq!(
//!     outcome.exception_or_none().map(|e| e.error_chain()),
//!     Some("computed value: 42 -> failed".to_string())
//! );
//! ```
use crate::traits::IntoContext;
use std::borrow::Cow;

/// A lazily-evaluated context that defers string generation until needed.
///
/// # Type Parameters
///
/// * `F` - A closure type that implements `FnOnce() -> String`.
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F> {
    /// Creates a new `LazyContext` from a closure.
    ///
    /// The closure runs only when the context is attached to a failure.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoContext for LazyContext<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Owned((self.generator)())
    }
}
