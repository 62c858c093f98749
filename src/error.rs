//! Error handling for the preloader library.
//!
//! The hooks themselves are fire-and-forget and never surface errors to the
//! harness; the types here exist for the fallible edges of the crate, namely
//! progress sinks that write to external resources.

use std::io;
use thiserror::Error;

/// Errors that can happen when using preloader.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other
    /// categories, such as a poisoned sink state.
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors raised by sinks writing their
    /// progress text to a stream.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a preloader error.
pub type Result<T> = std::result::Result<T, Error>;
