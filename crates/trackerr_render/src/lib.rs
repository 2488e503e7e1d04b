//! Human-readable stack traces for causal error chains.
//!
//! - [`error_stack`] / [`StackRenderer`]: chain to string
//! - [`error_without_cause`]: one frame's own text
//! - [`debug`] / [`DebugPrinter`]: print a trace for manual debugging
//! - [`debug_panic`]: recover, print, and hand back error-typed panics
//!
//! Rendering never fails; only the debug printer's writes can.

mod debug;
mod frame;
mod panic;
mod stack;

pub use debug::{debug, DebugPrinter, DEBUG_HEADER};
pub use frame::error_without_cause;
pub use panic::{debug_panic, payload_to_error};
pub use stack::{error_stack, ColorMode, StackRenderer, NIL_ERROR};
