//! Table command implementation
//!
//! Lists the phoneme catalog: code, mnemonic, and the sample file each code
//! is read from.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use sc01_synth::store::DirectoryStore;
use sc01_synth::PHONEMES;

/// One catalog row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TableRow {
    /// Phoneme code.
    pub code: u8,
    /// Code as two-digit hex.
    pub hex: String,
    /// Phoneme mnemonic.
    pub mnemonic: &'static str,
    /// Sample file under the default layout.
    pub resource: String,
}

/// Builds the catalog rows in code order.
pub fn rows() -> Vec<TableRow> {
    let store = DirectoryStore::default();
    PHONEMES
        .iter()
        .map(|p| TableRow {
            code: p.code(),
            hex: format!("{:02X}", p.code()),
            mnemonic: p.mnemonic(),
            resource: store.path_for(p.mnemonic()).display().to_string(),
        })
        .collect()
}

/// Run the table command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: always 0
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rows = rows();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "SC-01 Phonemes".cyan().bold());
    println!("{}", "==============".cyan());
    for row in &rows {
        println!(
            "  {} {:>3}  {:<5} {}",
            row.hex.bold(),
            row.code,
            row.mnemonic,
            row.resource.dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
