//! Progress sink writing to an arbitrary stream.

use crate::error::Result;
use crate::sink::ProgressSink;
use std::io::Write;

/// Writes each progress update as one line to the wrapped writer.
///
/// Unlike the terminal sink, a stream cannot be rewritten in place, so every
/// update appends a line and clearing appends an empty one. This makes the
/// sink suitable for log files and captured output.
///
/// ## Example
///
/// ```rust
/// use preloader::sink::{ProgressSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.set_text("Loading... 50%").unwrap();
///
/// let output = sink.into_inner();
/// assert_eq!(String::from_utf8(output).unwrap(), "Loading... 50%\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    /// Destination for the progress lines.
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a new [`WriterSink`] wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressSink for WriterSink<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
