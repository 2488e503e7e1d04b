//! Stack-trace rendering.
//!
//! Turns a causal chain into one line per error, outermost first:
//!
//! ```text
//!   save failed
//! ⤷ ——saving file——
//! ⤷ disk failure
//! ```
//!
//! Checkpoint errors are bracketed so they stand out as named waypoints.
//! Every frame shows only its own text (see [`error_without_cause`]).

use std::error::Error;

use tracing::warn;
use trackerr_core::chain::chain;
use trackerr_core::is_checkpoint;

use crate::error_without_cause;

/// Rendered in place of a trace when there is no error.
pub const NIL_ERROR: &str = "nil error";

/// Indent of the first frame.
const FIRST: &str = "  ";
/// Points from a frame to the frame above it, starting every line after the
/// first.
const ARROW: &str = "⤷ ";
/// Bracket placed on both sides of a checkpoint frame.
const CHECKPOINT: &str = "——";
/// Marker appended when a chain is cut at the frame cap.
const TRUNCATED: &str = "...";

/// ANSI color codes for terminal output.
mod colors {
    pub const CHECKPOINT: &str = "\x1b[1;36m"; // Bold cyan
    pub const ARROW: &str = "\x1b[2;34m"; // Dim blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for rendered traces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// `is_tty` is only consulted in `Auto` mode. Detecting it is left to the
    /// caller, who knows where the output is going.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders causal chains as multi-line traces.
///
/// The default renderer uses no colors and no frame cap, producing exactly
/// the plain-text layout shown in the module docs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackRenderer {
    colors: bool,
    max_frames: Option<usize>,
}

impl StackRenderer {
    /// Plain-text renderer without a frame cap.
    pub fn new() -> Self {
        StackRenderer::default()
    }

    /// Enable or disable colors according to `mode`.
    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode, is_tty: bool) -> Self {
        self.colors = mode.should_use_colors(is_tty);
        self
    }

    /// Stop rendering after `max` frames (at least one).
    ///
    /// Causal chains are expected to be finite, but a cyclic `source()`
    /// implementation would otherwise never terminate.
    #[must_use]
    pub fn with_max_frames(mut self, max: usize) -> Self {
        self.max_frames = Some(max.max(1));
        self
    }

    #[inline]
    pub fn uses_colors(self) -> bool {
        self.colors
    }

    /// Render the chain of `e`, or [`NIL_ERROR`] when there is no error.
    ///
    /// The result always ends with a single newline.
    pub fn render(&self, e: Option<&(dyn Error + 'static)>) -> String {
        let Some(e) = e else {
            return format!("{NIL_ERROR}\n");
        };

        let mut out = String::new();
        let mut frames = chain(e);
        let limit = self.max_frames.unwrap_or(usize::MAX);
        for (i, frame) in frames.by_ref().take(limit).enumerate() {
            self.push_frame(&mut out, i, frame);
        }

        if frames.next().is_some() {
            warn!(max_frames = limit, "error chain truncated while rendering");
            self.push_arrow(&mut out);
            out.push_str(TRUNCATED);
        }

        out.push('\n');
        out
    }

    fn push_frame(&self, out: &mut String, index: usize, frame: &(dyn Error + 'static)) {
        if index == 0 {
            if !is_checkpoint(frame) {
                out.push_str(FIRST);
            }
        } else {
            self.push_arrow(out);
        }

        let text = error_without_cause(frame);
        if is_checkpoint(frame) {
            let bracketed = format!("{CHECKPOINT}{text}{CHECKPOINT}");
            self.push_colored(out, &bracketed, colors::CHECKPOINT);
        } else {
            out.push_str(&text);
        }
    }

    fn push_arrow(&self, out: &mut String) {
        // Newline stays outside the color codes so every line starts clean.
        out.push('\n');
        self.push_colored(out, ARROW, colors::ARROW);
    }

    fn push_colored(&self, out: &mut String, text: &str, color: &str) {
        if self.colors {
            out.push_str(color);
            out.push_str(text);
            out.push_str(colors::RESET);
        } else {
            out.push_str(text);
        }
    }
}

/// Render the chain of `e` as a plain-text trace.
///
/// `None` renders as [`NIL_ERROR`].
pub fn error_stack(e: Option<&(dyn Error + 'static)>) -> String {
    StackRenderer::new().render(e)
}
