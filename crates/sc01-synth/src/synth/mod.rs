//! The phoneme renderer.
//!
//! A [`Synthesizer`] loads every catalog resource once at construction and
//! then maps phoneme-code sequences to concatenated PCM. Load failures are
//! isolated per entry: the synthesizer is always usable, and a failed entry
//! renders as silence. Output failures are returned to the caller.

mod report;


use std::io::{self, Write};

use log::{info, warn};

use crate::config::SynthConfig;
use crate::error::SynthError;
use crate::store::SampleStore;
use crate::table::{PhonemeEntry, PhonemeTable, PHONEMES};

pub use report::{EntryReport, EntryStatus, LoadReport};

/// Options applied while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum samples kept per phoneme.
    pub sample_limit: Option<usize>,
}

/// Renders phoneme codes to 16-bit PCM.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    table: PhonemeTable,
    report: LoadReport,
}

impl Synthesizer {
    /// Loads every phoneme resource from `store`.
    ///
    /// Never fails. Check [`success`](Self::success) or
    /// [`report`](Self::report) to find out whether every resource loaded.
    pub fn load<S: SampleStore + ?Sized>(store: &S, options: LoadOptions) -> Self {
        let mut table = PhonemeTable::new().with_sample_limit(options.sample_limit);
        let mut entries = Vec::with_capacity(table.entry_count());

        for phoneme in PHONEMES.iter() {
            let code = phoneme.code();
            let resource = phoneme.mnemonic();
            let location = store.locate(resource);

            let loaded = match store.open(resource) {
                Ok(reader) => table.load_from(code, reader),
                Err(e) => Err(SynthError::resource_read(resource, e)),
            };
            let status = match loaded {
                Ok(samples) => EntryStatus::Loaded { samples },
                Err(e) => {
                    warn!("phoneme {:#04x}: {} ({})", code, e, location);
                    EntryStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };

            entries.push(EntryReport {
                code,
                mnemonic: resource,
                location,
                status,
            });
        }

        let report = LoadReport { entries };
        info!(
            "loaded {}/{} phonemes ({} samples)",
            report.loaded_count(),
            table.entry_count(),
            report.total_samples()
        );

        Self { table, report }
    }

    /// Loads from the directory store described by `config`.
    pub fn from_config(config: &SynthConfig) -> Self {
        Self::load(
            &config.store(),
            LoadOptions {
                sample_limit: config.sample_limit,
            },
        )
    }

    /// True if every resource loaded.
    pub fn success(&self) -> bool {
        self.report.is_success()
    }

    /// Per-entry load outcome.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// The loaded sample table.
    pub fn table(&self) -> &PhonemeTable {
        &self.table
    }

    /// Highest code that maps to a table entry.
    pub fn max_phoneme_value(&self) -> u8 {
        u8::try_from(self.table.entry_count().saturating_sub(1)).unwrap_or(u8::MAX)
    }

    /// Returns the entry for `code`, or `None` if the code is past the table.
    pub fn lookup(&self, code: u8) -> Option<&PhonemeEntry> {
        if code > self.max_phoneme_value() {
            return None;
        }
        self.table.entry_at(code)
    }

    /// Writes the samples of each phoneme in `phonemes` to `out`, in order.
    ///
    /// Codes past the table are skipped. Samples are written unmodified, so
    /// splitting a sequence across calls yields the same bytes as one call.
    /// Write errors are returned as-is; nothing is retried.
    pub fn talk<W: Write + ?Sized>(&self, phonemes: &[u8], out: &mut W) -> io::Result<()> {
        for &code in phonemes {
            if let Some(entry) = self.lookup(code) {
                let pcm = entry.pcm_bytes();
                if !pcm.is_empty() {
                    out.write_all(pcm)?;
                }
            }
        }
        Ok(())
    }

    /// Renders `phonemes` into a byte vector.
    pub fn render(&self, phonemes: &[u8]) -> Vec<u8> {
        let entries: Vec<&PhonemeEntry> =
            phonemes.iter().filter_map(|&code| self.lookup(code)).collect();
        let len = entries.iter().map(|entry| entry.pcm_bytes().len()).sum();

        let mut pcm = Vec::with_capacity(len);
        for entry in entries {
            pcm.extend_from_slice(entry.pcm_bytes());
        }
        pcm
    }
}
