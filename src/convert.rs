//! Free conversion helpers between [`Outcome`], `Result` and [`CaughtError`].
use crate::outcome::Outcome;
use crate::types::CaughtError;
use std::any::Any;
use std::fmt::Display;

#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, CaughtError> {
    outcome.into_result()
}

#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Any + Send + Display,
{
    Outcome::from_result(result)
}

/// Collapses a nested outcome; the outer failure wins over the inner one.
#[inline]
pub fn flatten_outcome<T>(outcome: Outcome<Outcome<T>>) -> Outcome<T> {
    outcome.and_then(|inner| inner)
}

/// Takes the wrapped error back out when it has type `E`.
///
/// Failures holding any other type are returned unchanged in `Err`.
#[inline]
pub fn downcast_outcome<T, E>(outcome: Outcome<T>) -> Result<Result<T, E>, CaughtError>
where
    E: Any,
{
    match outcome {
        Outcome::Success(value) => Ok(Ok(value)),
        Outcome::Failure(error) => error.downcast::<E>().map(Err),
    }
}
