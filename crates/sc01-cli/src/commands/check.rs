//! Check command implementation
//!
//! Loads every phoneme resource and reports which ones are usable.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use sc01_synth::pcm::duration_seconds;
use sc01_synth::{EntryReport, EntryStatus, Synthesizer, SAMPLE_RATE};

use super::resolve_config;

/// Machine-readable check result.
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    /// Directory the samples were loaded from.
    pub sample_dir: String,
    /// True if every resource loaded.
    pub success: bool,
    /// Number of entries that loaded.
    pub loaded: usize,
    /// Number of catalog entries.
    pub total: usize,
    /// Total samples across loaded entries.
    pub total_samples: usize,
    /// Sample rate of the resources.
    pub sample_rate: u32,
    /// Per-entry outcome.
    pub entries: &'a [EntryReport],
}

/// Run the check command
///
/// # Arguments
/// * `samples` - Sample directory override
/// * `config` - Path to a JSON config file
/// * `sample_limit` - Per-phoneme sample cap override
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every resource loaded, 1 otherwise
pub fn run(
    samples: Option<&str>,
    config: Option<&str>,
    sample_limit: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let config = resolve_config(samples, config, sample_limit)?;
    let synth = Synthesizer::from_config(&config);
    let report = synth.report();

    let output = CheckOutput {
        sample_dir: config.sample_dir.display().to_string(),
        success: synth.success(),
        loaded: report.loaded_count(),
        total: synth.table().entry_count(),
        total_samples: report.total_samples(),
        sample_rate: SAMPLE_RATE,
        entries: &report.entries,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_human(output: &CheckOutput<'_>) {
    println!("{} {}", "Checking".cyan().bold(), output.sample_dir);
    println!();

    for entry in output.entries {
        match &entry.status {
            EntryStatus::Loaded { samples } => println!(
                "  {} {:#04x} {:<5} {:>7} samples ({:.3}s)",
                "ok".green(),
                entry.code,
                entry.mnemonic,
                samples,
                duration_seconds(*samples)
            ),
            EntryStatus::Failed { error } => println!(
                "  {} {:#04x} {:<5} {}",
                "!!".red(),
                entry.code,
                entry.mnemonic,
                error.dimmed()
            ),
        }
    }

    println!();
    let summary = format!(
        "{}/{} phonemes loaded, {:.2}s of audio",
        output.loaded,
        output.total,
        duration_seconds(output.total_samples)
    );
    if output.success {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc01_synth::pcm::encode_pcm16;
    use sc01_synth::PHONEMES;

    #[test]
    fn test_check_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        for p in PHONEMES.iter() {
            let path = dir.path().join(format!("{}.raw", p.mnemonic()));
            std::fs::write(path, encode_pcm16(&[1])).unwrap();
        }

        let code = run(dir.path().to_str(), None, None, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let code = run(dir.path().to_str(), None, None, false).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_check_output_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EH3.raw"), encode_pcm16(&[1, 2, 3])).unwrap();

        let config = resolve_config(dir.path().to_str(), None, None).unwrap();
        let synth = Synthesizer::from_config(&config);
        let output = CheckOutput {
            sample_dir: config.sample_dir.display().to_string(),
            success: synth.success(),
            loaded: synth.report().loaded_count(),
            total: synth.table().entry_count(),
            total_samples: synth.report().total_samples(),
            sample_rate: SAMPLE_RATE,
            entries: &synth.report().entries,
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["loaded"], 1);
        assert_eq!(json["total"], 64);
        assert_eq!(json["total_samples"], 3);
        assert_eq!(json["entries"][0]["mnemonic"], "EH3");
        assert_eq!(json["entries"][0]["status"], "loaded");
        assert_eq!(json["entries"][1]["status"], "failed");
    }
}
