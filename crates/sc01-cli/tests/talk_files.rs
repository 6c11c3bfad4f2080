//! File-to-file tests for the talk command.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sc01-cli --test talk_files
//! ```

use std::path::Path;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use sc01_cli::commands::talk;
use sc01_synth::pcm::encode_pcm16;
use sc01_synth::PHONEMES;

fn write_voice(dir: &Path, skip: &[&str]) {
    for p in PHONEMES.iter().filter(|p| !skip.contains(&p.mnemonic())) {
        let samples = [i16::from(p.code()), i16::from(p.code()) * -2];
        std::fs::write(dir.join(format!("{}.raw", p.mnemonic())), encode_pcm16(&samples))
            .unwrap();
    }
}

fn expected(codes: &[u8]) -> Vec<u8> {
    codes
        .iter()
        .filter(|&&c| c < 64)
        .flat_map(|&c| encode_pcm16(&[i16::from(c), i16::from(c) * -2]))
        .collect()
}

#[test]
fn test_binary_input_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write_voice(dir.path(), &[]);

    let codes = [0x1B, 0x02, 0x99, 0x18, 0x26, 0x3F];
    let input = dir.path().join("codes.bin");
    let output = dir.path().join("out.raw");
    std::fs::write(&input, codes).unwrap();

    let code = talk::run(
        dir.path().to_str(),
        None,
        None,
        input.to_str(),
        output.to_str(),
        None,
        true,
        false,
    )
    .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(std::fs::read(&output).unwrap(), expected(&codes));
}

#[test]
fn test_mnemonics_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write_voice(dir.path(), &[]);
    let output = dir.path().join("hello.raw");

    talk::run(
        dir.path().to_str(),
        None,
        None,
        None,
        output.to_str(),
        Some("H EH1 L O PA1"),
        false,
        false,
    )
    .unwrap();

    assert_eq!(
        std::fs::read(&output).unwrap(),
        expected(&[0x1B, 0x02, 0x18, 0x26, 0x3E])
    );
}

#[test]
fn test_unknown_mnemonic_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    write_voice(dir.path(), &[]);
    let output = dir.path().join("never.raw");

    let err = talk::run(
        dir.path().to_str(),
        None,
        None,
        None,
        output.to_str(),
        Some("H EH9"),
        false,
        false,
    )
    .unwrap_err();

    assert!(err.to_string().contains("EH9"));
    assert!(!output.exists());
}

#[test]
fn test_missing_sample_is_silent_unless_strict() {
    let dir = tempfile::tempdir().unwrap();
    write_voice(dir.path(), &["L"]);
    let output = dir.path().join("out.raw");

    let code = talk::run(
        dir.path().to_str(),
        None,
        None,
        None,
        output.to_str(),
        Some("H EH1 L O"),
        false,
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        std::fs::read(&output).unwrap(),
        expected(&[0x1B, 0x02, 0x26])
    );

    let strict_output = dir.path().join("strict.raw");
    let code = talk::run(
        dir.path().to_str(),
        None,
        None,
        None,
        strict_output.to_str(),
        Some("H EH1 L O"),
        false,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(!strict_output.exists());
}

#[test]
fn test_config_file_selects_samples() {
    let dir = tempfile::tempdir().unwrap();
    let voice = dir.path().join("voice");
    std::fs::create_dir(&voice).unwrap();
    write_voice(&voice, &[]);

    let config = dir.path().join("sc01.json");
    std::fs::write(&config, r#"{ "sample_dir": "voice", "sample_limit": 1 }"#).unwrap();
    let output = dir.path().join("out.raw");

    talk::run(
        None,
        config.to_str(),
        None,
        None,
        output.to_str(),
        Some("T T"),
        false,
        true,
    )
    .unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), encode_pcm16(&[0x2A, 0x2A]));
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_voice(dir.path(), &[]);
    let input = dir.path().join("absent.bin");
    let output = dir.path().join("out.raw");

    let err = talk::run(
        dir.path().to_str(),
        None,
        None,
        input.to_str(),
        output.to_str(),
        None,
        false,
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("absent.bin"));
    assert!(!output.exists());
}
