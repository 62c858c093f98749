//! Tests for the progress sink implementations.

use preloader::sink::{BarSink, MemorySink, ProgressSink, WriterSink};

mod common;
use common::helpers::*;

#[test]
fn test_memory_sink_records_updates() {
    let mut sink = MemorySink::new();
    let display = sink.handle();

    sink.set_text("Loading... 10%").unwrap();
    sink.set_text("Loading... 90%").unwrap();

    assert_display_text(&display, "Loading... 90%");
    assert_eq!(display.history(), vec!["Loading... 10%", "Loading... 90%"]);
    assert_eq!(display.clears(), 0);
}

#[test]
fn test_memory_sink_clear_empties_text() {
    let mut sink = MemorySink::new();
    let display = sink.handle();

    sink.set_text("Loading... 99%").unwrap();
    sink.clear().unwrap();

    assert_display_empty(&display);
    assert_eq!(display.clears(), 1);
    // History keeps what was displayed before the clear.
    assert_eq!(display.history(), vec!["Loading... 99%"]);
}

#[test]
fn test_memory_handle_clones_share_state() {
    let mut sink = MemorySink::new();
    let display = sink.handle();
    let other = display.clone();

    sink.set_text("Loading... 42%").unwrap();

    assert_display_text(&display, "Loading... 42%");
    assert_display_text(&other, "Loading... 42%");
}

#[test]
fn test_writer_sink_writes_lines() {
    let mut sink = WriterSink::new(Vec::new());

    sink.set_text("Loading... 25%").unwrap();
    sink.set_text("Loading... 50%").unwrap();
    sink.clear().unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "Loading... 25%\nLoading... 50%\n\n");
}

#[test]
fn test_writer_sink_propagates_io_errors() {
    // A zero-length buffer rejects every write.
    let mut full: [u8; 0] = [];
    let mut sink = WriterSink::new(&mut full[..]);

    assert!(sink.set_text("Loading... 1%").is_err());
}

#[test]
fn test_bar_sink_hidden() {
    let mut sink = BarSink::hidden();
    assert!(sink.is_hidden());

    // A hidden sink still accepts updates.
    sink.set_text("Loading... 75%").unwrap();
    assert_eq!(sink.message(), "Loading... 75%");
    sink.clear().unwrap();
}

#[test]
fn test_bar_sink_set_text_updates_message() {
    let mut sink = BarSink::hidden();

    sink.set_text("Loading... 5%").unwrap();
    sink.set_text("Loading... 95%").unwrap();
    assert_eq!(sink.message(), "Loading... 95%");
}

#[test]
fn test_failing_sink_reports_io_error() {
    let mut sink = FailingSink;
    let error = sink.set_text("Loading... 1%").unwrap_err();
    assert!(error.to_string().contains("I/O error"));
}
