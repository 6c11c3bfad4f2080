//! Synthesizer configuration.
//!
//! Configuration is a small JSON document; every field is optional.
//!
//! ```json
//! {
//!   "sample_dir": "rawSamples",
//!   "extension": "raw",
//!   "sample_limit": 8192
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::store::{DirectoryStore, DEFAULT_EXTENSION, DEFAULT_SAMPLE_DIR};

/// Per-phoneme capacity of the classic fixed-size sample buffers.
pub const LEGACY_SAMPLE_LIMIT: usize = 8192;

/// Where samples are loaded from and how much of each is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Directory holding one sample file per phoneme.
    pub sample_dir: PathBuf,
    /// Sample file extension, without the dot.
    pub extension: String,
    /// Maximum samples kept per phoneme. `None` keeps whole resources.
    pub sample_limit: Option<usize>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_dir: PathBuf::from(DEFAULT_SAMPLE_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            sample_limit: None,
        }
    }
}

impl SynthConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration file.
    ///
    /// Relative `sample_dir` values resolve against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SynthError::config(path, e.to_string()))?;
        let mut config =
            Self::from_json(&text).map_err(|e| SynthError::config(path, e.to_string()))?;

        if config.sample_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.sample_dir = parent.join(&config.sample_dir);
            }
        }
        Ok(config)
    }

    /// Builds the directory store this configuration describes.
    pub fn store(&self) -> DirectoryStore {
        DirectoryStore::new(&self.sample_dir).with_extension(&self.extension)
    }
}
