//! Error types for configuration resolution

use std::io;
use thiserror::Error;

/// Result type alias using the resolution error type
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failures that stop resolution before anything is dispatched
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Quickstart is non-interactive and cannot prompt for missing values
    #[error("Please specify the {required} of your project when using --quickstart")]
    QuickstartIncomplete { required: &'static str },

    /// The operator aborted the prompt session
    #[error("Setup cancelled.")]
    Cancelled,

    /// The terminal could not be read or written
    #[error("Terminal error: {0}")]
    Terminal(io::Error),
}

impl From<io::Error> for ResolveError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            ResolveError::Cancelled
        } else {
            ResolveError::Terminal(err)
        }
    }
}
