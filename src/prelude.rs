//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().outcome_ctx_with(|| format!("parsing port {raw:?}"))
//! }
//!
//! assert_eq!(port("8080").get_or_default(0), 8080);
//! assert_eq!(port("http").get_or_default(0), 0);
//! ```

// Macros
pub use crate::{catching, context, failure};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{CaughtError, LazyContext};

// Traits
pub use crate::traits::{IntoContext, ResultExt};
