//! Terminal progress sink backed by an `indicatif` spinner.

use crate::error::Result;
use crate::sink::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Displays the progress text as the message of a terminal spinner.
///
/// The spinner carries no position of its own; the hooks feed it fully
/// formatted text such as `Loading... 50%`. Clearing removes the spinner
/// from the terminal.
///
/// ## Example
///
/// ```rust
/// use preloader::sink::BarSink;
///
/// // Hidden sink for non-TTY environments.
/// let sink = BarSink::hidden();
/// assert!(sink.is_hidden());
/// ```
pub struct BarSink {
    /// The spinner showing the current progress message.
    bar: ProgressBar,
}

impl BarSink {
    const TEMPLATE_SPINNER: &'static str = "{spinner:.green} {msg}";

    /// Creates a new [`BarSink`] drawing to the terminal.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template(Self::TEMPLATE_SPINNER)
                .unwrap(),
        );
        Self { bar }
    }

    /// Creates a new [`BarSink`] that draws nothing.
    ///
    /// This is the right choice for non-interactive environments, such as
    /// test runs.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Returns `true` if the underlying spinner is hidden.
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Returns the currently displayed message.
    pub fn message(&self) -> String {
        self.bar.message()
    }
}

impl Default for BarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarSink {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.bar.set_message(text.to_string());
        self.bar.tick();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.bar.finish_and_clear();
        Ok(())
    }
}
