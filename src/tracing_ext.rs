//! Tracing integration for outcome-rail.
//!
//! With the `tracing` feature enabled, every panic or `Err` captured into a
//! [`Failure`](crate::Outcome::Failure) emits a `DEBUG` event, and
//! [`Outcome::log_failure`] reports a failure at `ERROR` level while passing the
//! outcome through. Without the feature both are no-ops.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::outcome::Outcome;
use crate::types::CaughtError;

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record_capture(error: &CaughtError) {
    tracing::debug!(
        error = %error.error_chain(),
        trace_status = ?error.trace().status(),
        "captured failure"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn record_capture(_error: &CaughtError) {}

impl<T> Outcome<T> {
    /// Emits an `ERROR` event describing the failure, then returns `self` unchanged.
    ///
    /// A success emits nothing. Without the `tracing` feature this only returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<()>::failure("quota exceeded").context("uploading").log_failure();
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn log_failure(self) -> Self {
        #[cfg(feature = "tracing")]
        {
            if let Outcome::Failure(error) = &self {
                tracing::error!(
                    error = %error.error_chain(),
                    contexts = error.context.len(),
                    trace = %error.trace(),
                    "outcome failed"
                );
            }
        }
        self
    }
}
