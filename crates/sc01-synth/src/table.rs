//! Phoneme catalog and the per-instance sample table.
//!
//! The catalog binds each SC-01 phoneme code to its mnemonic. Codes are
//! assigned by position and consumers address entries by number only, so the
//! order of [`PHONEMES`] must never change.

use std::io::Read;

use log::debug;

use crate::error::{SynthError, SynthResult};
use crate::pcm::{decode_pcm16, encode_pcm16};

/// Number of phonemes in the catalog.
pub const PHONEME_COUNT: usize = 64;

/// Highest valid phoneme code.
pub const MAX_PHONEME_CODE: u8 = (PHONEME_COUNT - 1) as u8;

/// Code of the `STOP` slot. Rendered like any other phoneme.
pub const STOP_CODE: u8 = 0x3F;

/// A catalog entry: phoneme code and its mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    code: u8,
    mnemonic: &'static str,
}

impl Phoneme {
    const fn new(code: u8, mnemonic: &'static str) -> Self {
        Self { code, mnemonic }
    }

    /// Numeric phoneme code.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// SC-01 mnemonic, also used as the sample resource key.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }
}

/// The SC-01 phoneme catalog in code order.
pub static PHONEMES: [Phoneme; PHONEME_COUNT] = [
    Phoneme::new(0x00, "EH3"),
    Phoneme::new(0x01, "EH2"),
    Phoneme::new(0x02, "EH1"),
    Phoneme::new(0x03, "PA0"),
    Phoneme::new(0x04, "DT"),
    Phoneme::new(0x05, "A2"),
    Phoneme::new(0x06, "A1"),
    Phoneme::new(0x07, "ZH"),
    Phoneme::new(0x08, "AH2"),
    Phoneme::new(0x09, "I3"),
    Phoneme::new(0x0A, "I2"),
    Phoneme::new(0x0B, "I1"),
    Phoneme::new(0x0C, "M"),
    Phoneme::new(0x0D, "N"),
    Phoneme::new(0x0E, "B"),
    Phoneme::new(0x0F, "V"),
    Phoneme::new(0x10, "CH"),
    Phoneme::new(0x11, "SH"),
    Phoneme::new(0x12, "Z"),
    Phoneme::new(0x13, "AW1"),
    Phoneme::new(0x14, "NG"),
    Phoneme::new(0x15, "AH1"),
    Phoneme::new(0x16, "OO1"),
    Phoneme::new(0x17, "OO"),
    Phoneme::new(0x18, "L"),
    Phoneme::new(0x19, "K"),
    Phoneme::new(0x1A, "J"),
    Phoneme::new(0x1B, "H"),
    Phoneme::new(0x1C, "G"),
    Phoneme::new(0x1D, "F"),
    Phoneme::new(0x1E, "D"),
    Phoneme::new(0x1F, "S"),
    Phoneme::new(0x20, "A"),
    Phoneme::new(0x21, "AY"),
    Phoneme::new(0x22, "Y1"),
    Phoneme::new(0x23, "UH3"),
    Phoneme::new(0x24, "AH"),
    Phoneme::new(0x25, "P"),
    Phoneme::new(0x26, "O"),
    Phoneme::new(0x27, "I"),
    Phoneme::new(0x28, "U"),
    Phoneme::new(0x29, "Y"),
    Phoneme::new(0x2A, "T"),
    Phoneme::new(0x2B, "R"),
    Phoneme::new(0x2C, "E"),
    Phoneme::new(0x2D, "W"),
    Phoneme::new(0x2E, "AE"),
    Phoneme::new(0x2F, "AE1"),
    Phoneme::new(0x30, "AW2"),
    Phoneme::new(0x31, "UH2"),
    Phoneme::new(0x32, "UH1"),
    Phoneme::new(0x33, "UH"),
    Phoneme::new(0x34, "O2"),
    Phoneme::new(0x35, "O1"),
    Phoneme::new(0x36, "IU"),
    Phoneme::new(0x37, "U1"),
    Phoneme::new(0x38, "THV"),
    Phoneme::new(0x39, "TH"),
    Phoneme::new(0x3A, "ER"),
    Phoneme::new(0x3B, "EH"),
    Phoneme::new(0x3C, "E1"),
    Phoneme::new(0x3D, "AW"),
    Phoneme::new(0x3E, "PA1"),
    Phoneme::new(0x3F, "STOP"),
];

/// Returns the number of phonemes in the catalog.
pub fn entry_count() -> usize {
    PHONEMES.len()
}

/// Looks up a catalog entry by code.
pub fn phoneme(code: u8) -> Option<&'static Phoneme> {
    PHONEMES.get(usize::from(code))
}

/// Looks up a phoneme code by mnemonic, ignoring ASCII case.
pub fn code_for_mnemonic(mnemonic: &str) -> Option<u8> {
    PHONEMES
        .iter()
        .find(|p| p.mnemonic.eq_ignore_ascii_case(mnemonic))
        .map(|p| p.code)
}

/// Parses mnemonic text into phoneme codes.
///
/// Tokens are separated by whitespace or commas. Each token is either a
/// mnemonic (`EH3`, `pa0`) or a numeric code (`42`, `0x2A`). Numeric codes
/// are passed through unchecked, so codes past the catalog can be expressed
/// and will render as silence.
///
/// # Example
/// ```
/// use sc01_synth::table::parse_mnemonics;
///
/// let codes = parse_mnemonics("H EH1 L, O 0x3F").unwrap();
/// assert_eq!(codes, vec![0x1B, 0x02, 0x18, 0x26, 0x3F]);
/// ```
pub fn parse_mnemonics(text: &str) -> SynthResult<Vec<u8>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> SynthResult<u8> {
    let unknown = || SynthError::UnknownMnemonic {
        token: token.to_string(),
    };

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16).map_err(|_| unknown());
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return token.parse::<u8>().map_err(|_| unknown());
    }
    code_for_mnemonic(token).ok_or_else(unknown)
}

/// One phoneme's loaded sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeEntry {
    phoneme: Phoneme,
    samples: Vec<i16>,
    pcm: Vec<u8>,
}

impl PhonemeEntry {
    fn empty(phoneme: Phoneme) -> Self {
        Self {
            phoneme,
            samples: Vec::new(),
            pcm: Vec::new(),
        }
    }

    /// Phoneme code of this entry.
    pub fn code(&self) -> u8 {
        self.phoneme.code
    }

    /// Resource key the samples are loaded from.
    pub fn resource(&self) -> &'static str {
        self.phoneme.mnemonic
    }

    /// Loaded samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Loaded samples encoded as little-endian bytes, ready for output.
    pub fn pcm_bytes(&self) -> &[u8] {
        &self.pcm
    }

    /// Number of loaded samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Sample buffers for every catalog entry.
///
/// Each table owns its buffers; two tables never share sample data.
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    entries: Vec<PhonemeEntry>,
    sample_limit: Option<usize>,
}

impl Default for PhonemeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PhonemeTable {
    /// Creates a table with every entry empty.
    pub fn new() -> Self {
        Self {
            entries: PHONEMES.iter().copied().map(PhonemeEntry::empty).collect(),
            sample_limit: None,
        }
    }

    /// Caps the number of samples any entry may hold.
    pub fn with_sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Returns the per-entry sample cap, if any.
    pub fn sample_limit(&self) -> Option<usize> {
        self.sample_limit
    }

    /// Returns the number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry for `code`, or `None` past the end of the table.
    pub fn entry_at(&self, code: u8) -> Option<&PhonemeEntry> {
        self.entries.get(usize::from(code))
    }

    /// Iterates over entries in code order.
    pub fn entries(&self) -> impl Iterator<Item = &PhonemeEntry> {
        self.entries.iter()
    }

    /// Stores raw resource bytes as the samples for `code`.
    ///
    /// Replaces whatever the entry held before.
    ///
    /// # Returns
    /// The number of samples stored
    pub fn load(&mut self, code: u8, raw: &[u8]) -> SynthResult<usize> {
        let limit = self.sample_limit;
        let entry = self
            .entries
            .get_mut(usize::from(code))
            .ok_or(SynthError::CodeOutOfRange { code })?;

        entry.samples = decode_pcm16(raw, limit);
        entry.pcm = encode_pcm16(&entry.samples);
        debug!(
            "loaded {} samples for phoneme {:#04x} ({})",
            entry.samples.len(),
            code,
            entry.resource()
        );
        Ok(entry.samples.len())
    }

    /// Reads a resource stream to the end and loads it into `code`.
    ///
    /// On a read failure the entry is left empty.
    pub fn load_from<R: Read>(&mut self, code: u8, mut reader: R) -> SynthResult<usize> {
        let resource = phoneme(code)
            .ok_or(SynthError::CodeOutOfRange { code })?
            .mnemonic;

        let mut raw = Vec::new();
        match reader.read_to_end(&mut raw) {
            Ok(_) => self.load(code, &raw),
            Err(e) => {
                self.clear(code);
                Err(SynthError::resource_read(resource, e))
            }
        }
    }

    fn clear(&mut self, code: u8) {
        if let Some(entry) = self.entries.get_mut(usize::from(code)) {
            entry.samples.clear();
            entry.pcm.clear();
        }
    }
}
