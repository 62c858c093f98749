//! Represents a progress notification emitted by the loading harness.

use std::fmt;

/// A single progress notification.
///
/// The harness reports how many bytes have been loaded so far, and, when it
/// knows it, the expected total. A missing or zero total means the overall
/// size is unknown and no percentage can be computed.
///
/// ## Example
///
/// ```rust
/// use preloader::event::ProgressEvent;
///
/// let event = ProgressEvent::new(50, 200);
/// assert_eq!(event.percent(), Some(25));
/// assert_eq!(event.to_string(), "Loading... 25%");
///
/// let event = ProgressEvent::indeterminate(1024);
/// assert_eq!(event.percent(), None);
/// assert_eq!(event.to_string(), "Loading... 1024 bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Bytes loaded so far.
    pub current: u64,
    /// Expected total bytes, if known.
    pub total: Option<u64>,
}

impl ProgressEvent {
    /// Creates a new [`ProgressEvent`] with a known total.
    ///
    /// A `total` of zero is treated as unknown, mirroring harnesses that
    /// report zero when the content length is unavailable.
    pub fn new(current: u64, total: u64) -> Self {
        Self {
            current,
            total: Some(total),
        }
    }

    /// Creates a new [`ProgressEvent`] without a known total.
    pub fn indeterminate(current: u64) -> Self {
        Self {
            current,
            total: None,
        }
    }

    /// Returns the rounded completion percentage, if computable.
    ///
    /// For `0 <= current <= total` the result lies in `[0, 100]`.
    pub fn percent(&self) -> Option<u64> {
        match self.total {
            Some(total) if total > 0 => {
                Some(((self.current as f64 / total as f64) * 100.0).round() as u64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(percent) => write!(f, "Loading... {}%", percent),
            None => write!(f, "Loading... {} bytes", self.current),
        }
    }
}
