//! Error types for the renderer and its input pipeline

use thiserror::Error;

/// Result type alias for termqr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, encoding, or rendering
#[derive(Error, Debug)]
pub enum Error {
    /// The input stream held more bytes than allowed
    #[error("Input longer than the maximum of {limit} bytes")]
    InputTooLarge { limit: usize },

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A render mode other than `text` or `sixel` was requested
    #[error("Unsupported render mode: '{0}' (expected 'text' or 'sixel')")]
    UnsupportedRenderMode(String),

    /// The bitmap generator rejected the input
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Process exit code reported for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedRenderMode(_) | Error::Config(_) => 2,
            Error::InputTooLarge { .. } => 3,
            Error::Encode(_) => 4,
            Error::Io(_) => 5,
        }
    }
}
