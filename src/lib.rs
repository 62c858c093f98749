//! Preloader provides the lifecycle hooks a module-loading harness invokes
//! to report load progress and completion status, originally the contract of
//! a WebAssembly bundle initializer.
//!
//! # Quick Start
//!
//! ```rust
//! use preloader::{event::ProgressEvent, hooks::LoaderHooksBuilder, sink::MemorySink};
//!
//! let sink = MemorySink::new();
//! let display = sink.handle();
//! let mut hooks = LoaderHooksBuilder::new().sink(sink).build();
//!
//! hooks.on_start();
//! hooks.on_progress(ProgressEvent::new(50, 200));
//! assert_eq!(display.text(), "Loading... 25%");
//!
//! hooks.on_complete();
//! assert_eq!(display.text(), "");
//!
//! hooks.on_success(&"module handle");
//! ```
//!
//! # Module Organization
//!
//! The preloader crate is organized into several modules:
//!
//! - [`event`] - The progress event reported by the harness
//! - [`hooks`] - The `LoaderHooks` hook set and its builder
//! - [`sink`] - The injected progress display capability and its implementations
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod event;
pub mod hooks;
pub mod sink;

pub use error::{Error, Result};
pub use event::ProgressEvent;
pub use hooks::{LoaderHooks, LoaderHooksBuilder};
pub use sink::{BarSink, MemoryHandle, MemorySink, ProgressSink, WriterSink};
