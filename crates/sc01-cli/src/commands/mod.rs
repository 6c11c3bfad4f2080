//! CLI command implementations

pub mod check;
pub mod table;
pub mod talk;

use anyhow::Result;
use sc01_synth::SynthConfig;

/// Builds the synthesizer configuration from command-line options.
///
/// Starts from the config file when given, otherwise from defaults; explicit
/// flags then override individual fields.
///
/// # Arguments
/// * `samples` - Sample directory override
/// * `config` - Path to a JSON config file
/// * `sample_limit` - Per-phoneme sample cap override
pub fn resolve_config(
    samples: Option<&str>,
    config: Option<&str>,
    sample_limit: Option<usize>,
) -> Result<SynthConfig> {
    let mut resolved = match config {
        Some(path) => SynthConfig::from_file(path)?,
        None => SynthConfig::default(),
    };

    if let Some(dir) = samples {
        resolved.sample_dir = dir.into();
    }
    if sample_limit.is_some() {
        resolved.sample_limit = sample_limit;
    }

    log::debug!("using config {:?}", resolved);
    Ok(resolved)
}
