//! Raw 16-bit PCM conversion and hashing utilities.
//!
//! Sample resources and rendered output share one format: headerless signed
//! 16-bit little-endian mono samples at [`SAMPLE_RATE`](crate::SAMPLE_RATE).

use byteorder::{ByteOrder, LittleEndian};

/// Bytes per encoded sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Decodes raw little-endian bytes into 16-bit samples.
///
/// Only whole samples are decoded; a trailing odd byte is ignored. When
/// `limit` is set, at most that many samples are kept.
///
/// # Arguments
/// * `bytes` - Raw resource content
/// * `limit` - Optional maximum sample count
///
/// # Returns
/// Decoded samples in original order
pub fn decode_pcm16(bytes: &[u8], limit: Option<usize>) -> Vec<i16> {
    let mut count = bytes.len() / BYTES_PER_SAMPLE;
    if let Some(limit) = limit {
        count = count.min(limit);
    }

    let mut samples = vec![0i16; count];
    LittleEndian::read_i16_into(&bytes[..count * BYTES_PER_SAMPLE], &mut samples);
    samples
}

/// Encodes 16-bit samples as little-endian bytes.
pub fn encode_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut bytes = vec![0u8; samples.len() * BYTES_PER_SAMPLE];
    LittleEndian::write_i16_into(samples, &mut bytes);
    bytes
}

/// Computes the BLAKE3 hash of raw PCM bytes.
///
/// # Returns
/// A 64-character lowercase hexadecimal string
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Returns the playback duration of `sample_count` samples in seconds.
pub fn duration_seconds(sample_count: usize) -> f64 {
    sample_count as f64 / f64::from(crate::SAMPLE_RATE)
}
