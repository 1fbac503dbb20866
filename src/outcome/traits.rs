use crate::outcome::core::Outcome;
use crate::types::CaughtError;
use std::any::Any;
use std::fmt::{self, Display};

impl<T: Display> Display for Outcome<T> {
    /// Renders `success(<value>)`, or the failure's error chain and trace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "success({value})"),
            Outcome::Failure(error) => Display::fmt(error, f),
        }
    }
}

/// Converts a `Result`, wrapping its error in a [`CaughtError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let outcome: Outcome<u8> = "300".parse::<u8>().into();
/// assert!(outcome.is_failure());
/// ```
impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Any + Send + Display,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T> From<CaughtError> for Outcome<T> {
    #[inline]
    fn from(error: CaughtError) -> Self {
        Outcome::Failure(error)
    }
}

impl<T> From<Outcome<T>> for Result<T, CaughtError> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Serializes as `{"success": value}` or
/// `{"failure": {"message": .., "contexts": [..], "trace": ..}}`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Outcome::Success(value) => {
                serializer.serialize_newtype_variant("Outcome", 0, "success", value)
            }
            Outcome::Failure(error) => {
                serializer.serialize_newtype_variant("Outcome", 1, "failure", error)
            }
        }
    }
}
