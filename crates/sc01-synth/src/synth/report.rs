//! Per-entry outcome of loading a synthesizer.

use serde::Serialize;

/// Outcome of loading one phoneme resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    /// Resource read; holds this many samples.
    Loaded {
        /// Samples stored for the entry.
        samples: usize,
    },
    /// Resource could not be read; the entry is silent.
    Failed {
        /// Error text.
        error: String,
    },
}

/// Load outcome for a single phoneme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Phoneme code.
    pub code: u8,
    /// Phoneme mnemonic.
    pub mnemonic: &'static str,
    /// Where the resource was looked up.
    pub location: String,
    /// What happened.
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryReport {
    /// Returns true if the entry loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, EntryStatus::Loaded { .. })
    }
}

/// Load outcome for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// One report per catalog entry, in code order.
    pub entries: Vec<EntryReport>,
}

impl LoadReport {
    /// True if every resource loaded.
    pub fn is_success(&self) -> bool {
        self.entries.iter().all(EntryReport::is_loaded)
    }

    /// Entries that failed to load.
    pub fn failures(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries.iter().filter(|e| !e.is_loaded())
    }

    /// Number of entries that loaded.
    pub fn loaded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_loaded()).count()
    }

    /// Total samples across loaded entries.
    pub fn total_samples(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e.status {
                EntryStatus::Loaded { samples } => samples,
                EntryStatus::Failed { .. } => 0,
            })
            .sum()
    }
}
