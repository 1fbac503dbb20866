//! Failure-side types and utilities.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{context, CaughtError};
//!
//! let user_id = 42;
//! let err = CaughtError::new("connection reset")
//!     .with_context("db")
//!     .with_context(context!("loading user {}", user_id));
//!
//! assert_eq!(err.error_chain(), "loading user 42 -> db -> connection reset");
//! ```
use smallvec::SmallVec;
use std::borrow::Cow;

pub mod caught_error;
pub mod lazy_context;

pub use caught_error::*;
pub use lazy_context::*;

/// SmallVec-backed stack of context messages attached to a [`CaughtError`].
///
/// Uses inline storage for one entry, the common case of a single annotation
/// at an API boundary.
pub type ContextVec = SmallVec<[Cow<'static, str>; 1]>;
