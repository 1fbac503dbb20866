use crate::traits::IntoContext;
use crate::types::{CaughtError, LazyContext};
use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// Either a successful value or a captured failure.
///
/// `Outcome<T>` turns panicking code into an explicit value that can be
/// inspected, transformed and recovered. Combinators named `*_catching` turn a
/// panic raised by their closure into a new [`Failure`](Outcome::Failure); every
/// other combinator lets such a panic unwind through the caller untouched.
///
/// | Combinator | On `Failure` | Panic in the closure |
/// |---|---|---|
/// | [`map`](Outcome::map) | passed through | unwinds |
/// | [`map_catching`](Outcome::map_catching) | passed through | captured as `Failure` |
/// | [`recover`](Outcome::recover) | becomes `Success` | unwinds |
/// | [`recover_catching`](Outcome::recover_catching) | becomes `Success` | captured as `Failure` |
/// | [`get_or_else`](Outcome::get_or_else) | fallback value | unwinds |
/// | [`fold`](Outcome::fold) | `on_failure` branch | unwinds |
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the successful value
/// * `Failure(CaughtError)` - Contains the captured error and its trace
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let greeting = Outcome::success("Hello").map(|_| "World");
/// assert_eq!(greeting.get_or_throw(), "World");
///
/// let boom = Outcome::<i32>::run_catching(|| panic!("boom"));
/// assert!(boom.is_failure());
/// assert_eq!(boom.exception_or_none().map(|e| e.message()), Some("boom".to_string()));
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(CaughtError),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome, capturing the current backtrace.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<()>::failure("error");
    /// assert_eq!(
    ///     outcome.exception_or_none().and_then(|e| e.downcast_ref::<&str>()),
    ///     Some(&"error")
    /// );
    /// ```
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Any + Send + Display,
    {
        Self::Failure(CaughtError::new(error))
    }

    /// Creates a failed outcome with a caller-supplied backtrace.
    ///
    /// Pass [`Backtrace::force_capture`] to record frames regardless of
    /// `RUST_BACKTRACE`.
    #[inline]
    pub fn failure_with_trace<E>(error: E, trace: Backtrace) -> Self
    where
        E: Any + Send + Display,
    {
        Self::Failure(CaughtError::with_trace(error, trace))
    }

    /// Wraps an already captured error.
    #[inline]
    pub fn from_caught(error: CaughtError) -> Self {
        Self::Failure(error)
    }

    /// Runs `block`, capturing a panic into a [`Failure`](Outcome::Failure).
    ///
    /// The failure carries the original panic payload, so
    /// [`get_or_throw`](Outcome::get_or_throw) later resumes unwinding with exactly
    /// what `block` raised. The installed panic hook still runs when `block` panics.
    ///
    /// A payload that is not a `&str` or `String` renders as `Box<dyn Any>`. This
    /// includes a typed error rethrown by [`get_or_throw`](Outcome::get_or_throw):
    /// its message is not carried across the unwind, though
    /// [`downcast_ref`](CaughtError::downcast_ref) still finds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let total = Outcome::run_catching(|| [1, 2, 3].iter().sum::<i32>());
    /// assert_eq!(total.into_value(), Some(6));
    /// ```
    pub fn run_catching<F>(block: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::captured(CaughtError::from_panic(payload)),
        }
    }

    /// Runs a fallible `block`; both a panic and an `Err` become a
    /// [`Failure`](Outcome::Failure).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed = Outcome::run_catching_result(|| "forty".parse::<i32>());
    /// assert!(parsed.is_failure());
    /// assert!(parsed.exception_or_none().is_some_and(|e| e.is::<std::num::ParseIntError>()));
    /// ```
    pub fn run_catching_result<E, F>(block: F) -> Self
    where
        E: Any + Send + Display,
        F: FnOnce() -> Result<T, E>,
    {
        match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::captured(CaughtError::new(error)),
            Err(payload) => Self::captured(CaughtError::from_panic(payload)),
        }
    }

    /// Converts a `Result`, wrapping its error in a [`CaughtError`].
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Any + Send + Display,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::captured(CaughtError::new(error)),
        }
    }

    #[inline]
    fn captured(error: CaughtError) -> Self {
        crate::tracing_ext::record_capture(&error);
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a captured error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, or `None` on failure.
    #[must_use]
    #[inline]
    pub fn get_or_none(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the captured error, or `None` on success.
    #[must_use]
    #[inline]
    pub fn exception_or_none(&self) -> Option<&CaughtError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the value, if successful.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the captured error, if failed.
    #[must_use]
    #[inline]
    pub fn into_exception(self) -> Option<CaughtError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, CaughtError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value, or resumes unwinding with the original error payload.
    ///
    /// The re-raised payload is the value that was captured, not the
    /// [`CaughtError`] wrapper. Its backtrace is best effort only: it stays on the
    /// discarded wrapper and is not printed, since resuming skips the panic hook.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    /// use std::panic;
    ///
    /// assert_eq!(Outcome::success(7).get_or_throw(), 7);
    ///
    /// let payload =
    ///     panic::catch_unwind(|| Outcome::<i32>::failure("gone").get_or_throw()).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<&str>(), Some(&"gone"));
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => error.rethrow(),
        }
    }

    /// Resumes unwinding with the original error payload on failure; discards the
    /// value otherwise.
    ///
    /// Useful for `Outcome<()>` produced by side-effecting steps.
    #[inline]
    pub fn throw_on_failure(self) {
        if let Self::Failure(error) = self {
            error.rethrow();
        }
    }

    /// Returns the value, or the result of `on_failure` applied to the captured error.
    ///
    /// A panic inside `on_failure` unwinds through the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::<usize>::failure("no input").get_or_else(|e| e.message().len());
    /// assert_eq!(len, 8);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, on_failure: F) -> T
    where
        F: FnOnce(CaughtError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Calls exactly one of the two closures, chosen by the variant, and returns its result.
    ///
    /// A panic inside either closure unwinds through the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rendered = Outcome::success(3).fold(|n| format!("got {n}"), |e| e.message());
    /// assert_eq!(rendered, "got 3");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(CaughtError) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Maps the success value, passing a failure through unchanged.
    ///
    /// `transform` is never called on failure. A panic inside `transform`
    /// unwinds through the caller; use [`map_catching`](Outcome::map_catching)
    /// to capture it instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::success(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`map`](Outcome::map), but a panic inside `transform` becomes a new failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let checked = Outcome::success(0).map_catching(|d: i32| 10 / d);
    /// assert!(checked.is_failure());
    /// ```
    #[inline]
    pub fn map_catching<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::run_catching(move || transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a step that produces its own outcome, short-circuiting on failure.
    ///
    /// A panic inside `next` unwinds through the caller.
    #[inline]
    pub fn and_then<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Turns a failure into a success using `transform`; a success is returned as is.
    ///
    /// A panic inside `transform` unwinds through the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let port = Outcome::<u16>::failure("unset").recover(|_| 8080);
    /// assert_eq!(port.into_value(), Some(8080));
    /// ```
    #[inline]
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(CaughtError) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Self::Success(transform(error)),
        }
    }

    /// Like [`recover`](Outcome::recover), but a panic inside `transform` becomes a
    /// new failure.
    #[inline]
    pub fn recover_catching<F>(self, transform: F) -> Self
    where
        F: FnOnce(CaughtError) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Self::run_catching(move || transform(error)),
        }
    }

    /// Calls `action` with the value on success, then returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = Outcome::success(5).on_success(|v| seen.push(*v)).map(|v| v + 1);
    /// assert_eq!(seen, vec![5]);
    /// assert_eq!(outcome.into_value(), Some(6));
    /// ```
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the captured error on failure, then returns `self` unchanged.
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&CaughtError),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Attaches a context message to a failure; a success is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<()>::failure("timeout").context("fetching profile");
    /// assert_eq!(
    ///     outcome.exception_or_none().map(|e| e.error_chain()),
    ///     Some("fetching profile -> timeout".to_string())
    /// );
    /// ```
    #[inline]
    pub fn context<C>(self, context: C) -> Self
    where
        C: IntoContext,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Self::Failure(error.with_context(context)),
        }
    }

    /// Attaches a lazily built context message to a failure.
    ///
    /// `f` only runs when the outcome is a failure.
    #[inline]
    pub fn context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context(LazyContext::new(f))
    }
}
