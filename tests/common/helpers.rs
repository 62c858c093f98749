#![allow(dead_code)]

use preloader::error::{Error, Result};
use preloader::hooks::{LoaderHooks, LoaderHooksBuilder};
use preloader::sink::{MemoryHandle, MemorySink, ProgressSink};
use std::io;

// Common test constants
pub const TEST_TIMER_LABEL: &str = "test-initializer";

/// Creates a hook set recording into memory, plus the handle observing it
pub fn create_recording_hooks() -> (LoaderHooks, MemoryHandle) {
    let sink = MemorySink::new();
    let display = sink.handle();
    let hooks = LoaderHooksBuilder::new()
        .sink(sink)
        .timer_label(TEST_TIMER_LABEL)
        .build();
    (hooks, display)
}

/// A sink whose every operation fails, for exercising the swallowed-error path
pub struct FailingSink;

impl ProgressSink for FailingSink {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::from(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "display gone",
        )))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::from(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "display gone",
        )))
    }
}

/// Asserts that the display currently shows the expected text
pub fn assert_display_text(display: &MemoryHandle, expected: &str) {
    assert_eq!(
        display.text(),
        expected,
        "Display text mismatch, history: {:?}",
        display.history()
    );
}

/// Asserts that the display is currently empty
pub fn assert_display_empty(display: &MemoryHandle) {
    assert_display_text(display, "");
}
