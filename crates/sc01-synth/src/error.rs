//! Error types for the phoneme renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesizer operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while loading or addressing phoneme samples.
///
/// Translation itself never produces one of these: out-of-range codes are
/// silence, and output-sink failures surface as plain [`std::io::Error`].
#[derive(Debug, Error)]
pub enum SynthError {
    /// A phoneme resource could not be opened or read.
    #[error("failed to read phoneme resource '{resource}': {source}")]
    ResourceRead {
        /// Resource key (the phoneme mnemonic).
        resource: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A phoneme code outside the catalog was addressed directly.
    #[error("phoneme code {code:#04x} is outside the table")]
    CodeOutOfRange {
        /// The offending code.
        code: u8,
    },

    /// A token in mnemonic text does not name a phoneme.
    #[error("unknown phoneme mnemonic '{token}'")]
    UnknownMnemonic {
        /// The unrecognized token.
        token: String,
    },

    /// Configuration file unreadable or malformed.
    #[error("invalid config '{}': {message}", .path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates a resource read error.
    pub fn resource_read(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::ResourceRead {
            resource: resource.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::ResourceRead { .. } => "SC01_001",
            SynthError::CodeOutOfRange { .. } => "SC01_002",
            SynthError::UnknownMnemonic { .. } => "SC01_003",
            SynthError::Config { .. } => "SC01_004",
            SynthError::Io(_) => "SC01_005",
        }
    }
}
