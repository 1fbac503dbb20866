//! Captured failure paired with the backtrace taken when it was captured.
//!
//! This module provides [`CaughtError`], the failure side of
//! [`Outcome`](crate::Outcome). It wraps:
//! - The original error value, kept opaque as `Box<dyn Any + Send>` so that it can be
//!   handed back to the unwinder unchanged
//! - A [`Backtrace`] captured at construction unless one is supplied
//! - A stack of context messages, most recent last

use crate::traits::IntoContext;
use crate::types::ContextVec;
use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt::Display;

mod render;
mod traits;

pub(crate) use render::{render_display, render_panic, RenderFn};

/// Error wrapper that stores the original error plus its diagnostic trace.
///
/// Equality of the wrapper itself is not meaningful; compare the wrapped error
/// through [`downcast_ref`](CaughtError::downcast_ref) instead.
///
/// # Examples
///
/// ```
/// use outcome_rail::CaughtError;
///
/// let err = CaughtError::new("disk full").with_context("writing snapshot");
///
/// assert_eq!(err.downcast_ref::<&str>(), Some(&"disk full"));
/// assert_eq!(err.message(), "disk full");
/// assert_eq!(err.error_chain(), "writing snapshot -> disk full");
/// ```
pub struct CaughtError {
    pub(crate) error: Box<dyn Any + Send>,
    pub(crate) render: RenderFn,
    pub(crate) context: ContextVec,
    pub(crate) trace: Backtrace,
}

impl CaughtError {
    /// Wraps `error`, capturing the current backtrace.
    ///
    /// The backtrace honours `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; when both are
    /// unset it renders as `disabled backtrace`.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Any + Send + Display,
    {
        Self::with_trace(error, Backtrace::capture())
    }

    /// Wraps `error` with a caller-supplied backtrace.
    #[inline]
    pub fn with_trace<E>(error: E, trace: Backtrace) -> Self
    where
        E: Any + Send + Display,
    {
        Self {
            error: Box::new(error),
            render: render_display::<E>,
            context: ContextVec::new(),
            trace,
        }
    }

    /// Wraps a payload obtained from [`std::panic::catch_unwind`], capturing the
    /// current backtrace.
    ///
    /// Payloads of type `&'static str` and `String` render as their text; any other
    /// payload renders as `Box<dyn Any>`.
    #[inline]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::from_panic_with_trace(payload, Backtrace::capture())
    }

    /// Wraps a panic payload with a caller-supplied backtrace.
    #[inline]
    pub fn from_panic_with_trace(payload: Box<dyn Any + Send>, trace: Backtrace) -> Self {
        Self {
            error: payload,
            render: render_panic,
            context: ContextVec::new(),
            trace,
        }
    }

    /// Adds a single context entry produced by [`IntoContext`].
    #[inline]
    pub fn with_context<C>(mut self, context: C) -> Self
    where
        C: IntoContext,
    {
        self.context.push(context.into_context());
        self
    }

    /// Returns the wrapped error as an opaque reference.
    #[inline]
    pub fn error(&self) -> &(dyn Any + Send) {
        &*self.error
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[inline]
    pub fn is<E: Any>(&self) -> bool {
        (*self.error).is::<E>()
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    #[inline]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        (*self.error).downcast_ref::<E>()
    }

    /// Attempts to take the wrapped error out as an `E`, handing `self` back
    /// untouched when the type does not match.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        let Self {
            error,
            render,
            context,
            trace,
        } = self;
        match error.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(error) => Err(Self {
                error,
                render,
                context,
                trace,
            }),
        }
    }

    /// Consumes the wrapper, returning the original error payload.
    #[inline]
    pub fn into_error(self) -> Box<dyn Any + Send> {
        self.error
    }

    /// Renders the wrapped error on its own, without context or trace.
    #[must_use]
    #[inline]
    pub fn message(&self) -> String {
        (self.render)(&*self.error)
    }

    /// Returns the attached contexts in LIFO order (most recent first).
    #[inline]
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.context.iter().rev().map(|ctx| &**ctx)
    }

    /// Returns the backtrace captured for this failure.
    #[inline]
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }

    /// Renders `ctxN -> ... -> ctx1 -> message`.
    #[must_use]
    pub fn error_chain(&self) -> String {
        let mut chain = String::new();
        for ctx in self.contexts() {
            chain.push_str(ctx);
            chain.push_str(" -> ");
        }
        chain.push_str(&self.message());
        chain
    }

    /// Resumes unwinding with the original payload.
    ///
    /// The payload leaves with the type and allocation it was captured with, so a
    /// surrounding `catch_unwind` sees exactly what was originally raised. The
    /// backtrace stays behind with the wrapper: a panic hook does not run on resume,
    /// and nothing re-attaches the trace to the payload.
    ///
    /// The contexts and the way the error was rendered stay behind as well. If the
    /// payload is caught again, for example by
    /// [`Outcome::run_catching`](crate::Outcome::run_catching), the new wrapper
    /// only knows how to render `&str` and `String` payloads. Any other type
    /// renders as `Box<dyn Any>` while still downcasting to its own type.
    pub fn rethrow(self) -> ! {
        std::panic::resume_unwind(self.error)
    }
}
