//! Error handling for directory lookups and classification.

pub mod util;

use std::io;

/// Specialized error type for the dossier crate
#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    /// Error reading a file or spawning a process
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An external lookup did not finish within its time limit
    #[error("Command `{command}` timed out after {seconds}s")]
    Timeout {
        /// The command line that was run
        command: String,
        /// Time limit that was exceeded
        seconds: u64,
    },

    /// An external lookup exited unsuccessfully
    #[error("Command `{command}` failed with {status}: {stderr}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// An encoded directory value could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error parsing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reduction level outside 0..=3
    #[error("Invalid reduction level {0}: expected 0, 1, 2 or 3")]
    InvalidLevel(u8),

    /// Anything else
    #[error("{0}")]
    Other(String),
}

impl DossierError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this error came from the transport (process, timeout) rather than the data
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Timeout { .. } | Self::CommandFailed { .. }
        )
    }
}

/// Result type for dossier operations
pub type Result<T> = std::result::Result<T, DossierError>;
