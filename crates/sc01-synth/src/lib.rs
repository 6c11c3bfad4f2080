//! SC-01 Phoneme Renderer
//!
//! This crate emulates the output of a Votrax SC-01 allophone speech chip by
//! concatenating pre-recorded samples:
//!
//! - Each of the 64 phoneme codes is bound to one sample resource
//! - A [`Synthesizer`] loads every resource once, at construction
//! - [`Synthesizer::talk`] maps a phoneme-code sequence to raw PCM
//!
//! # Audio Format
//!
//! Sample resources and output share one format: headerless signed 16-bit
//! little-endian mono PCM at 16000 samples per second. Wrapping the output in
//! a container is left to the consumer.
//!
//! # Example
//!
//! ```no_run
//! use sc01_synth::{DirectoryStore, LoadOptions, Synthesizer};
//!
//! let synth = Synthesizer::load(&DirectoryStore::new("rawSamples"), LoadOptions::default());
//! if !synth.success() {
//!     eprintln!("some phonemes failed to load and will be silent");
//! }
//!
//! let mut stdout = std::io::stdout().lock();
//! synth.talk(&[0x1B, 0x02, 0x18, 0x26], &mut stdout)?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`table`] - Phoneme catalog and sample table
//! - [`store`] - Sample storage backends
//! - [`synth`] - Loading and translation
//! - [`pcm`] - 16-bit PCM conversion and hashing
//! - [`config`] - JSON configuration

pub mod config;
pub mod error;
pub mod pcm;
pub mod store;
pub mod synth;
pub mod table;

// Re-export main types at crate root
pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use store::{DirectoryStore, MemoryStore, SampleStore};
pub use synth::{EntryReport, EntryStatus, LoadOptions, LoadReport, Synthesizer};
pub use table::{parse_mnemonics, Phoneme, PhonemeEntry, PhonemeTable, PHONEMES};

/// Sample rate of every resource and of rendered output, in Hz.
pub const SAMPLE_RATE: u32 = 16000;
