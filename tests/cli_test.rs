#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_airdrop-manifest");

#[test]
fn test_cli_writes_manifest_with_json_suffix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("tokens.csv");
    std::fs::write(&input, "wallet,tokens\n0xAAA,5\n")?;
    let prefix = temp_dir.path().join("airdrop");

    let output = Command::new(BIN).arg(&input).arg(&prefix).output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(temp_dir.path().join("airdrop.json"))?;
    assert_eq!(written, r#"[{"account":"0xAAA","amount":"5000000000000000000"}]"#);
    Ok(())
}

#[test]
fn test_cli_missing_input_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let prefix = temp_dir.path().join("airdrop");

    let output = Command::new(BIN)
        .arg(temp_dir.path().join("nope.csv"))
        .arg(&prefix)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("nope.csv"));
    assert!(!temp_dir.path().join("airdrop.json").exists());
    Ok(())
}

#[test]
fn test_cli_logs_failure_once_at_error_level() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(BIN)
        .env("RUST_LOG", "airdrop_manifest=error")
        .arg(temp_dir.path().join("nope.csv"))
        .arg(temp_dir.path().join("airdrop"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("failed").count(), 1, "stderr was: {}", stderr);
    Ok(())
}

#[test]
fn test_cli_unreadable_input_is_input_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    // 目錄當成輸入檔
    let output = Command::new(BIN)
        .arg(temp_dir.path())
        .arg(temp_dir.path().join("airdrop"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Could not read input file"));
    assert!(!stderr.contains("Could not write"));
    assert!(!temp_dir.path().join("airdrop.json").exists());
    Ok(())
}

#[test]
fn test_cli_bad_token_value_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("tokens.csv");
    std::fs::write(&input, "wallet,tokens\n0xDDD,notanumber\n")?;

    let output = Command::new(BIN)
        .arg(&input)
        .arg(temp_dir.path().join("airdrop"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("airdrop.json").exists());
    Ok(())
}

#[test]
fn test_cli_requires_two_arguments() -> Result<()> {
    let output = Command::new(BIN).arg("only-one.csv").output()?;
    assert!(!output.status.success());
    Ok(())
}
