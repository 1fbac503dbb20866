use super::CaughtError;
use std::fmt::{self, Debug, Display};

impl Display for CaughtError {
    /// `{}` renders the error chain, a newline, then the trace.
    /// `{:#}` renders the error chain alone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.error_chain());
        }
        write!(f, "{}\n{}", self.error_chain(), self.trace)
    }
}

impl Debug for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtError")
            .field("message", &self.message())
            .field("context", &self.context)
            .field("trace", &self.trace.status())
            .finish()
    }
}

impl std::error::Error for CaughtError {}

#[cfg(feature = "serde")]
impl serde::Serialize for CaughtError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CaughtError", 3)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("contexts", &self.contexts().collect::<Vec<_>>())?;
        state.serialize_field("trace", &self.trace.to_string())?;
        state.end()
    }
}
