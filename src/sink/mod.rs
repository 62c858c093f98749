//! Progress sinks: the display half of the loader hooks.
//!
//! The original harness contract wrote its progress text straight into a page
//! element looked up by a fixed id. That coupling is replaced here by an
//! injected [`ProgressSink`] capability: anything that can display a line of
//! text and clear it again can show load progress.
//!
//! # Overview
//!
//! Three implementations are provided:
//!
//! - [`BarSink`] - terminal display backed by an `indicatif` spinner
//! - [`WriterSink`] - writes each update as a line to any [`std::io::Write`]
//! - [`MemorySink`] - records updates in shared state, for inspection
//!
//! # Examples
//!
//! ```rust
//! use preloader::sink::{MemorySink, ProgressSink};
//!
//! let mut sink = MemorySink::new();
//! let handle = sink.handle();
//!
//! sink.set_text("Loading... 50%").unwrap();
//! assert_eq!(handle.text(), "Loading... 50%");
//!
//! sink.clear().unwrap();
//! assert_eq!(handle.text(), "");
//! ```

pub(crate) mod bar;
pub(crate) mod memory;
pub(crate) mod writer;

pub use bar::BarSink;
pub use memory::{MemoryHandle, MemorySink};
pub use writer::WriterSink;

use crate::error::Result;

/// A display capability for load-progress text.
///
/// Implementations own a single line of user-visible text: `set_text`
/// replaces it, `clear` empties it. Hooks treat failures as non-fatal and
/// only log them.
pub trait ProgressSink {
    /// Replaces the displayed text.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Clears the displayed text to the empty string.
    fn clear(&mut self) -> Result<()>;
}
