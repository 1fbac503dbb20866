//! The [`Outcome`] container and its combinators.
//!
//! An [`Outcome`] is either a `Success` carrying a value or a `Failure` carrying a
//! [`CaughtError`](crate::CaughtError). It turns panicking code into an explicit
//! value with [`Outcome::run_catching`], then lets callers transform, recover and
//! unwrap it without writing `catch_unwind` at every call site.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let config = Outcome::run_catching(|| -> u16 { panic!("config missing") })
//!     .on_failure(|e| eprintln!("falling back: {:#}", e))
//!     .recover(|_| 8080)
//!     .map(|port| format!("0.0.0.0:{port}"));
//!
//! assert_eq!(config.get_or_throw(), "0.0.0.0:8080");
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
