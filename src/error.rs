//! Error type shared by the generator, history log and front ends.

use std::io;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generation parameters that cannot produce a valid batch.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A save was requested with no passwords in hand.
    #[error("No passwords to save. Generate some first")]
    NothingToSave,

    /// History file or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Settings file or environment could not be read.
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Clipboard unavailable or rejected the contents.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidConfig`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfig(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
