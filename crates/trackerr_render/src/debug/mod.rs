//! Ad hoc debug printing of error traces.
//!
//! Meant for day to day manual debugging, not for logging: the output is a
//! header line followed by the rendered trace.

use std::error::Error;
use std::io::{self, Write};

use crate::StackRenderer;

/// First line of every debug print.
pub const DEBUG_HEADER: &str = "[Debugging error]";

/// Writes rendered traces to any [`Write`] target.
pub struct DebugPrinter<W: Write> {
    writer: W,
    renderer: StackRenderer,
}

impl<W: Write> DebugPrinter<W> {
    pub fn new(writer: W, renderer: StackRenderer) -> Self {
        DebugPrinter { writer, renderer }
    }

    pub fn renderer(&self) -> StackRenderer {
        self.renderer
    }

    /// Print the trace of `e`, returning the number of bytes written.
    ///
    /// A missing error prints a one-line notice instead of a trace.
    pub fn print(&mut self, e: Option<&(dyn Error + 'static)>) -> io::Result<usize> {
        let trace = self.renderer.render(e);
        let text = if e.is_some() {
            format!("{DEBUG_HEADER}\n{trace}")
        } else {
            format!("{DEBUG_HEADER} {trace}")
        };

        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(text.len())
    }

    /// Consume the printer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl DebugPrinter<io::Stdout> {
    /// Printer for stdout with a plain-text renderer.
    pub fn stdout() -> Self {
        DebugPrinter::new(io::stdout(), StackRenderer::new())
    }
}

/// Print the trace of `e` to stdout.
pub fn debug(e: Option<&(dyn Error + 'static)>) -> io::Result<usize> {
    DebugPrinter::stdout().print(e)
}
