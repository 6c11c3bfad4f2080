//! Talk command implementation
//!
//! Reads phoneme codes (binary bytes or mnemonic text) and writes the
//! rendered 16-bit PCM stream to a file or stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use sc01_synth::{parse_mnemonics, Synthesizer};

use super::resolve_config;

/// Number of phoneme codes handed to the synthesizer per call.
pub const CHUNK_SIZE: usize = 4096;

/// Run the talk command
///
/// # Arguments
/// * `samples` - Sample directory override
/// * `config` - Path to a JSON config file
/// * `sample_limit` - Per-phoneme sample cap override
/// * `input` - Binary phoneme code file (default: stdin)
/// * `output` - PCM output file (default: stdout)
/// * `mnemonics` - Mnemonic text to render instead of reading `input`
/// * `hash` - Print the BLAKE3 hash of the rendered PCM to stderr
/// * `strict` - Fail if any phoneme resource failed to load
///
/// # Returns
/// Exit code: 0 on success, 1 if `strict` and loading was incomplete
#[allow(clippy::too_many_arguments)]
pub fn run(
    samples: Option<&str>,
    config: Option<&str>,
    sample_limit: Option<usize>,
    input: Option<&str>,
    output: Option<&str>,
    mnemonics: Option<&str>,
    hash: bool,
    strict: bool,
) -> Result<ExitCode> {
    let config = resolve_config(samples, config, sample_limit)?;
    let synth = Synthesizer::from_config(&config);

    if !synth.success() {
        let failed = synth.report().failures().count();
        eprintln!(
            "{}: {} of {} phonemes failed to load from {}; they will be silent",
            "warning".yellow(),
            failed,
            synth.table().entry_count(),
            config.sample_dir.display()
        );
        if strict {
            for entry in synth.report().failures() {
                eprintln!("  {} {:#04x} {}", "!!".red(), entry.code, entry.location);
            }
            return Ok(ExitCode::from(1));
        }
    }

    // Resolve the input first; a bad input must not leave an output file behind.
    let source = match (mnemonics, input) {
        (Some(text), _) => Source::Codes(parse_mnemonics(text)?),
        (None, Some(path)) => Source::Stream(Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input: {}", path))?,
        ))),
        (None, None) => Source::Stream(Box::new(io::stdin().lock())),
    };

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create output: {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = HashingWriter::new(BufWriter::new(sink));

    let phonemes = match source {
        Source::Codes(codes) => {
            synth
                .talk(&codes, &mut out)
                .context("Failed to write PCM output")?;
            codes.len() as u64
        }
        Source::Stream(reader) => talk_stream(&synth, reader, &mut out)?,
    };
    out.flush().context("Failed to write PCM output")?;

    log::info!(
        "rendered {} phonemes into {} bytes",
        phonemes,
        out.bytes_written()
    );
    if hash {
        eprintln!("{} {}", "pcm hash:".dimmed(), out.hash_hex());
    }

    Ok(ExitCode::SUCCESS)
}

/// Where phoneme codes come from.
enum Source {
    /// Codes parsed from `--mnemonics`.
    Codes(Vec<u8>),
    /// Binary codes read from a file or stdin.
    Stream(Box<dyn Read>),
}

/// Feeds phoneme codes from `reader` to the synthesizer in chunks.
///
/// Each chunk is an independent `talk` call; since translation keeps no
/// state, the output equals rendering the whole input at once.
///
/// # Returns
/// The number of phoneme codes consumed
pub fn talk_stream<R: Read, W: Write + ?Sized>(
    synth: &Synthesizer,
    mut reader: R,
    out: &mut W,
) -> Result<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let count = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read phoneme input"),
        };
        synth
            .talk(&buffer[..count], out)
            .context("Failed to write PCM output")?;
        total += count as u64;
    }

    Ok(total)
}

/// Writer that hashes and counts everything passing through it.
pub struct HashingWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    bytes: u64,
}

impl<W: Write> HashingWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            bytes: 0,
        }
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// BLAKE3 hash of the bytes written so far, as lowercase hex.
    pub fn hash_hex(&self) -> String {
        self.hasher.finalize().to_hex().to_string()
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sc01_synth::pcm::{encode_pcm16, pcm_hash};
    use sc01_synth::{LoadOptions, MemoryStore, PHONEMES};

    fn synth() -> Synthesizer {
        let mut store = MemoryStore::new();
        for p in PHONEMES.iter() {
            store.insert(p.mnemonic(), encode_pcm16(&[i16::from(p.code()), -1]));
        }
        Synthesizer::load(&store, LoadOptions::default())
    }

    #[test]
    fn test_stream_matches_single_render() {
        let synth = synth();
        let codes: Vec<u8> = (0..3 * CHUNK_SIZE + 17).map(|i| (i % 80) as u8).collect();

        let mut out = Vec::new();
        let consumed = talk_stream(&synth, codes.as_slice(), &mut out).unwrap();

        assert_eq!(consumed, codes.len() as u64);
        assert_eq!(out, synth.render(&codes));
    }

    #[test]
    fn test_stream_empty_input() {
        let mut out = Vec::new();
        assert_eq!(talk_stream(&synth(), io::empty(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_hashing_writer() {
        let mut out = HashingWriter::new(Vec::new());
        out.write_all(b"abc").unwrap();
        out.write_all(b"def").unwrap();

        assert_eq!(out.bytes_written(), 6);
        assert_eq!(out.hash_hex(), pcm_hash(b"abcdef"));
        assert_eq!(out.inner, b"abcdef".to_vec());
    }
}
