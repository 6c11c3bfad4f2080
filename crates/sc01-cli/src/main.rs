//! SC-01 CLI - Command-line phoneme renderer
//!
//! This binary renders phoneme codes to raw 16-bit PCM and inspects
//! phoneme sample sets.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use sc01_cli::{commands, logging};

/// SC-01 - Votrax-style phoneme renderer
#[derive(Parser)]
#[command(name = "sc01")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render phoneme codes to raw 16-bit little-endian PCM at 16 kHz
    Talk {
        /// Directory holding one sample file per phoneme (default: rawSamples)
        #[arg(short, long)]
        samples: Option<String>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Keep at most this many samples per phoneme
        #[arg(long)]
        sample_limit: Option<usize>,

        /// Binary file of phoneme codes (default: stdin)
        #[arg(short, long, conflicts_with = "mnemonics")]
        input: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Render mnemonic text such as "H EH1 L O" instead of binary input
        #[arg(short, long)]
        mnemonics: Option<String>,

        /// Print the BLAKE3 hash of the rendered PCM to stderr
        #[arg(long)]
        hash: bool,

        /// Exit with an error if any phoneme sample failed to load
        #[arg(long)]
        strict: bool,
    },

    /// List the phoneme table
    Table {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Load every phoneme sample and report which are usable
    Check {
        /// Directory holding one sample file per phoneme (default: rawSamples)
        #[arg(short, long)]
        samples: Option<String>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Keep at most this many samples per phoneme
        #[arg(long)]
        sample_limit: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::yellow("warning"), e);
    }

    let result = match cli.command {
        Commands::Talk {
            samples,
            config,
            sample_limit,
            input,
            output,
            mnemonics,
            hash,
            strict,
        } => commands::talk::run(
            samples.as_deref(),
            config.as_deref(),
            sample_limit,
            input.as_deref(),
            output.as_deref(),
            mnemonics.as_deref(),
            hash,
            strict,
        ),
        Commands::Table { json } => commands::table::run(json),
        Commands::Check {
            samples,
            config,
            sample_limit,
            json,
        } => commands::check::run(samples.as_deref(), config.as_deref(), sample_limit, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_talk_defaults() {
        let cli = Cli::try_parse_from(["sc01", "talk"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Talk {
                samples,
                input,
                output,
                mnemonics,
                hash,
                strict,
                ..
            } => {
                assert!(samples.is_none());
                assert!(input.is_none());
                assert!(output.is_none());
                assert!(mnemonics.is_none());
                assert!(!hash);
                assert!(!strict);
            }
            _ => panic!("expected talk command"),
        }
    }

    #[test]
    fn test_cli_parses_talk_with_options() {
        let cli = Cli::try_parse_from([
            "sc01",
            "-vv",
            "talk",
            "--samples",
            "voice",
            "--mnemonics",
            "H EH1 L O",
            "--output",
            "hello.raw",
            "--sample-limit",
            "8192",
            "--hash",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Talk {
                samples,
                mnemonics,
                output,
                sample_limit,
                hash,
                ..
            } => {
                assert_eq!(samples.as_deref(), Some("voice"));
                assert_eq!(mnemonics.as_deref(), Some("H EH1 L O"));
                assert_eq!(output.as_deref(), Some("hello.raw"));
                assert_eq!(sample_limit, Some(8192));
                assert!(hash);
            }
            _ => panic!("expected talk command"),
        }
    }

    #[test]
    fn test_cli_rejects_input_with_mnemonics() {
        let err = Cli::try_parse_from([
            "sc01",
            "talk",
            "--input",
            "codes.bin",
            "--mnemonics",
            "AH",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn test_cli_parses_check_json() {
        let cli = Cli::try_parse_from(["sc01", "check", "--json", "-s", "voice"]).unwrap();
        match cli.command {
            Commands::Check { samples, json, .. } => {
                assert_eq!(samples.as_deref(), Some("voice"));
                assert!(json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_parses_table() {
        let cli = Cli::try_parse_from(["sc01", "table"]).unwrap();
        assert!(matches!(cli.command, Commands::Table { json: false }));
    }
}
