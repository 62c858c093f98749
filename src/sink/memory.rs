//! In-memory progress sink with an inspectable handle.

use crate::error::{Error, Result};
use crate::sink::ProgressSink;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SinkState {
    /// The text currently on display.
    text: String,
    /// Every text ever displayed, in order.
    history: Vec<String>,
    /// Number of times the display was cleared.
    clears: usize,
}

/// Records progress updates in shared state.
///
/// The sink itself moves into the hook set; a [`MemoryHandle`] obtained
/// beforehand stays with the caller and observes everything the hooks
/// display. This is the sink used throughout the crate's tests.
///
/// ## Example
///
/// ```rust
/// use preloader::sink::{MemorySink, ProgressSink};
///
/// let mut sink = MemorySink::new();
/// let handle = sink.handle();
///
/// sink.set_text("Loading... 25%").unwrap();
/// sink.set_text("Loading... 50%").unwrap();
/// sink.clear().unwrap();
///
/// assert_eq!(handle.text(), "");
/// assert_eq!(handle.history(), vec!["Loading... 25%", "Loading... 50%"]);
/// assert_eq!(handle.clears(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Arc<Mutex<SinkState>>,
}

impl MemorySink {
    /// Creates a new empty [`MemorySink`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle observing this sink's display state.
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            state: Arc::clone(&self.state),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SinkState>> {
        self.state
            .lock()
            .map_err(|_| Error::Internal("sink state poisoned".into()))
    }
}

impl ProgressSink for MemorySink {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut state = self.lock()?;
        state.text = text.to_string();
        state.history.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut state = self.lock()?;
        state.text.clear();
        state.clears += 1;
        Ok(())
    }
}

/// Read-only view on a [`MemorySink`]'s display state.
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    state: Arc<Mutex<SinkState>>,
}

impl MemoryHandle {
    /// Returns the text currently on display.
    pub fn text(&self) -> String {
        self.state.lock().map(|s| s.text.clone()).unwrap_or_default()
    }

    /// Returns every text that was displayed, in order.
    pub fn history(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|s| s.history.clone())
            .unwrap_or_default()
    }

    /// Returns how many times the display was cleared.
    pub fn clears(&self) -> usize {
        self.state.lock().map(|s| s.clears).unwrap_or_default()
    }
}
