//! A panic-capturing result container with explicit catching combinators.
//!
//! [`Outcome<T>`] is either `Success(T)` or `Failure(CaughtError)`. It turns
//! panicking code into a value, and its combinators state in their name whether a
//! panic raised inside a closure is captured (`*_catching`) or left to unwind.
//!
//! # Examples
//!
//! ## Capturing a panic
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<u32>::run_catching(|| panic!("boom"));
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.exception_or_none().map(|e| e.message()), Some("boom".to_string()));
//! ```
//!
//! ## Transforming and recovering
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let value = Outcome::<i32>::failure("no cache")
//!     .recover(|_| 10)
//!     .map_catching(|n| 100 / n)
//!     .get_or_default(0);
//!
//! assert_eq!(value, 10);
//! ```
//!
//! ## Re-raising the original error
//!
//! ```
//! use outcome_rail::Outcome;
//! use std::panic;
//!
//! let payload =
//!     panic::catch_unwind(|| Outcome::<()>::failure("error").get_or_throw()).unwrap_err();
//! assert_eq!(payload.downcast_ref::<&str>(), Some(&"error"));
//! ```

/// Free conversion helpers between Outcome, Result and CaughtError
pub mod convert;
/// Ergonomic macros for building outcomes and contexts
pub mod macros;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for contexts and std Result
pub mod traits;
/// CaughtError and context types
pub mod types;

/// Tracing integration (events are emitted with the `tracing` feature)
pub mod tracing_ext;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{CaughtError, ContextVec, LazyContext};
