//! Trait for converting types into failure context messages.
//!
//! # Implementations
//!
//! - `&'static str` - borrowed as is
//! - `String` - moved in without copying
//! - `Cow<'static, str>` - identity
//! - [`LazyContext`](crate::LazyContext) - evaluated on conversion
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoContext;
//!
//! assert_eq!("simple message".into_context(), "simple message");
//! assert_eq!(String::from("owned message").into_context(), "owned message");
//! ```
use std::borrow::Cow;

/// Converts a type into a context message attached to a [`CaughtError`](crate::CaughtError).
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::traits::IntoContext;
/// use std::borrow::Cow;
///
/// struct UserScope { user_id: u64 }
///
/// impl IntoContext for UserScope {
///     fn into_context(self) -> Cow<'static, str> {
///         Cow::Owned(format!("user_id={}", self.user_id))
///     }
/// }
///
/// assert_eq!(UserScope { user_id: 7 }.into_context(), "user_id=7");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as failure context",
    label = "this type does not implement `IntoContext`",
    note = "wrap a closure in `LazyContext::new` or use the `context!` macro"
)]
pub trait IntoContext {
    /// Converts `self` into a context message.
    fn into_context(self) -> Cow<'static, str>;
}

impl IntoContext for String {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Owned(self)
    }
}

impl IntoContext for &'static str {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

impl IntoContext for Cow<'static, str> {
    #[inline]
    fn into_context(self) -> Cow<'static, str> {
        self
    }
}
