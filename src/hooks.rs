//! Represents the loader lifecycle hook set.

use crate::event::ProgressEvent;
use crate::sink::{BarSink, ProgressSink};
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

/// The five lifecycle hooks invoked by a module-loading harness.
///
/// The harness owns the call ordering: [`on_start`] precedes all
/// [`on_progress`] calls, which precede [`on_complete`], which precedes
/// exactly one of [`on_success`] or [`on_failure`]. The hooks do not enforce
/// this. None of them returns a value to the harness, and none of them
/// panics or propagates an error; sink failures are logged and swallowed.
///
/// A hook set can be created via its builder:
///
/// ```rust
/// use preloader::hooks::LoaderHooksBuilder;
/// use preloader::sink::MemorySink;
///
/// let hooks = LoaderHooksBuilder::new().sink(MemorySink::new()).build();
/// ```
///
/// [`on_start`]: LoaderHooks::on_start
/// [`on_progress`]: LoaderHooks::on_progress
/// [`on_complete`]: LoaderHooks::on_complete
/// [`on_success`]: LoaderHooks::on_success
/// [`on_failure`]: LoaderHooks::on_failure
pub struct LoaderHooks {
    /// Display for the user-visible progress text.
    sink: Box<dyn ProgressSink>,
    /// Label naming the elapsed-time measurement in the completion notice.
    timer_label: String,
    /// Start of the elapsed-time measurement, set by `on_start`.
    started: Option<Instant>,
}

impl fmt::Debug for LoaderHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderHooks")
            .field("timer_label", &self.timer_label)
            .field("started", &self.started)
            .finish()
    }
}

impl LoaderHooks {
    const DEFAULT_TIMER_LABEL: &'static str = "initializer";

    /// Invoked once, before loading begins.
    ///
    /// Emits a loading-started notice and starts the elapsed-time
    /// measurement. The measurement handle is owned by this hook set; two
    /// hook sets time independently.
    pub fn on_start(&mut self) {
        info!("Loading...");
        self.started = Some(Instant::now());
    }

    /// Invoked zero or more times while loading.
    ///
    /// With a known, nonzero total the rounded percentage is logged and
    /// written to the sink as `Loading... {percent}%`. Without one, the raw
    /// byte count is logged and the sink is left untouched.
    pub fn on_progress(&mut self, event: ProgressEvent) {
        match event.percent() {
            Some(percent) => {
                info!("Loading... {}%", percent);
                self.display(&format!("Loading... {}%", percent));
            }
            None => info!("Loading... {} bytes", event.current),
        }
    }

    /// Invoked exactly once, after loading finishes.
    ///
    /// Success or failure is not yet known at this point. Emits the done
    /// notice with the elapsed time and clears the progress display,
    /// regardless of whether any progress was ever shown.
    pub fn on_complete(&mut self) {
        match self.started.take() {
            Some(started) => info!(
                "Loading... done! ({}: {:?})",
                self.timer_label,
                started.elapsed()
            ),
            None => info!("Loading... done!"),
        }
        if let Err(error) = self.sink.clear() {
            warn!("Unable to clear the progress display: {}", error);
        }
    }

    /// Invoked exactly once, only on successful instantiation.
    ///
    /// The module handle is opaque to the hooks; it is dumped for
    /// diagnostic purposes only.
    pub fn on_success(&mut self, module: &dyn fmt::Debug) {
        info!("Loading... successful!");
        info!("Module: {:?}", module);
    }

    /// Invoked exactly once, only on failure. Mutually exclusive with
    /// [`on_success`](LoaderHooks::on_success).
    ///
    /// The error value is opaque to the hooks and is logged as a warning,
    /// not re-thrown, retried, or transformed.
    pub fn on_failure(&mut self, error: &dyn fmt::Display) {
        warn!("Loading... failed! {}", error);
    }

    fn display(&mut self, text: &str) {
        if let Err(error) = self.sink.set_text(text) {
            warn!("Unable to update the progress display: {}", error);
        }
    }
}

/// Builds a [`LoaderHooks`] hook set.
///
/// Without an explicit sink, progress is displayed on the terminal via
/// [`BarSink`].
///
/// ```rust
/// use preloader::hooks::LoaderHooksBuilder;
/// use preloader::sink::BarSink;
///
/// let hooks = LoaderHooksBuilder::new()
///     .sink(BarSink::hidden())
///     .timer_label("wasm-initializer")
///     .build();
/// ```
pub struct LoaderHooksBuilder {
    sink: Option<Box<dyn ProgressSink>>,
    timer_label: String,
}

impl LoaderHooksBuilder {
    /// Creates a builder with the default settings.
    pub fn new() -> Self {
        Self {
            sink: None,
            timer_label: String::from(LoaderHooks::DEFAULT_TIMER_LABEL),
        }
    }

    /// Sets the progress sink receiving the displayed text.
    pub fn sink(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sets the label naming the elapsed-time measurement.
    pub fn timer_label(mut self, label: &str) -> Self {
        self.timer_label = String::from(label);
        self
    }

    /// Creates the [`LoaderHooks`] hook set.
    pub fn build(self) -> LoaderHooks {
        LoaderHooks {
            sink: self.sink.unwrap_or_else(|| Box::new(BarSink::new())),
            timer_label: self.timer_label,
            started: None,
        }
    }
}

impl Default for LoaderHooksBuilder {
    fn default() -> Self {
        Self::new()
    }
}
