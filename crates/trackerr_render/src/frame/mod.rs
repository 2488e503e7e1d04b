//! Per-frame text for stack traces.
//!
//! Errors conventionally render as `"<message>: <cause>"`. Printed frame by
//! frame, that would repeat the text of every cause on every line above it,
//! so each frame is reduced to its own contribution first.

use std::error::Error;

use trackerr_core::Trackable;

/// The text `e` contributes on its own, without its cause's text.
///
/// [`Trackable`] errors keep their message separately and return it as-is.
/// For any other error the cause's rendering is stripped from the end of
/// the error's rendering, surrounding whitespace is trimmed, and a single
/// trailing `:` is removed. An error without a cause renders unchanged.
pub fn error_without_cause(e: &(dyn Error + 'static)) -> String {
    if let Some(trackable) = e.downcast_ref::<Trackable>() {
        return trackable.message().to_owned();
    }

    let text = e.to_string();
    let Some(cause) = e.source() else {
        return text;
    };

    let cause = cause.to_string();
    let own = text.strip_suffix(cause.as_str()).unwrap_or(&text).trim();
    own.strip_suffix(':').unwrap_or(own).to_owned()
}

#[cfg(test)]
mod tests;
