use crate::{GuiError, OutputSink, PaintEvent};
use std::io::{self, Write};

/// Writes each paint message as one line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write(&self, event: &PaintEvent) -> Result<(), GuiError> {
        let mut stdout = io::stdout().lock();
        write_line(&mut stdout, event)
            .map_err(|e| GuiError::output(format!("failed to write to stdout: {}", e)))
    }
}

/// Writes the event's message followed by a newline, then flushes `out`.
pub fn write_line<W: Write>(out: &mut W, event: &PaintEvent) -> io::Result<()> {
    writeln!(out, "{}", event.message)?;
    out.flush()
}
