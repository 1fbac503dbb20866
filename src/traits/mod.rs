//! Conversion traits used across the crate.
//!
//! - [`IntoContext`]: Conversion into a context message for a failure
//! - [`ResultExt`]: Lifts a standard `Result` into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoContext, ResultExt};
//!
//! let outcome = "12x".parse::<u32>().outcome_ctx("parsing retry count");
//! assert!(outcome.is_failure());
//!
//! assert_eq!("inline".into_context(), "inline");
//! ```

pub mod into_context;
pub mod result_ext;

pub use into_context::IntoContext;
pub use result_ext::ResultExt;
