use std::any::Any;
use std::fmt::Display;

/// Renders an opaque error payload. Chosen once, when the concrete type is still known.
pub(crate) type RenderFn = fn(&(dyn Any + Send)) -> String;

pub(crate) fn render_display<E>(error: &(dyn Any + Send)) -> String
where
    E: Any + Display,
{
    error.downcast_ref::<E>().map(ToString::to_string).unwrap_or_default()
}

/// Mirrors what the default panic hook prints for a payload.
pub(crate) fn render_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
