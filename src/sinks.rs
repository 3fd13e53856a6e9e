//! Diagnostic sinks that write to an [`io::Write`] destination.

use std::io::{self, Write};

use minicpp_syntax::diagnostics::{Diagnostic, DiagnosticSink};

/// Writes each diagnostic as one log line, e.g. `[error] too long token (line: 3, column: 7)`.
///
/// Reporting cannot fail, so the first write error is kept and returned by [`WriterSink::finish`]. Nothing more is
/// written after it.
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
    errors_reported: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            errors_reported: 0,
        }
    }

    /// Number of error-severity diagnostics received so far.
    pub fn errors_reported(&self) -> usize {
        self.errors_reported
    }

    /// Flush and hand back the writer.
    ///
    /// ## Errors
    /// Returns the first write error seen while reporting, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors_reported += 1;
        }
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{diagnostic}") {
            tracing::warn!(error = %err, "diagnostic destination failed");
            self.error = Some(err);
        }
    }
}
