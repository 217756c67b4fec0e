// datasift/tests/cli_integration_tests.rs
//! CLI integration tests for the `datasift` binary.
//!
//! Each test runs the compiled binary inside its own temporary directory so that the
//! default `sample_input.txt` / `sample_output.json` paths never collide.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn datasift_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("datasift").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("DATASIFT_ALLOW_DEBUG_PII");
    cmd
}

#[test]
fn extract_embedded_sample_prints_report_and_saves_json() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["--quiet", "extract"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SECURE DATA EXTRACTION RESULTS"))
        .stdout(predicate::str::contains("***************9903"))
        .stdout(predicate::str::contains("6467").not())
        .stdout(predicate::str::contains("5425-2334").not())
        .stdout(predicate::str::contains("Processed"))
        .stdout(predicate::str::contains("Results saved to sample_output.json"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("sample_output.json"))?)?;
    assert_eq!(
        saved["credit_card"],
        serde_json::json!(["***************9903"])
    );
    assert_eq!(
        saved["currency"],
        serde_json::json!(["$1,234.56", "$89.99", "$49.00", "$299.95"])
    );
    assert_eq!(saved.as_object().unwrap().len(), 4);
    Ok(())
}

#[test]
fn extract_reads_sample_input_file_from_working_directory() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("sample_input.txt"), "Call 555.987.6543 now #Hello")?;
    datasift_in(&dir)
        .args(["-q", "extract", "--json-stdout", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"555.987.6543\""))
        .stdout(predicate::str::contains("\"#Hello\""))
        .stdout(predicate::str::contains("SECURE DATA").not());
    assert!(!dir.path().join("sample_output.json").exists());
    Ok(())
}

#[test]
fn extract_from_stdin_to_custom_output() -> Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("result.json");
    datasift_in(&dir)
        .args(["-q", "extract", "-i", "-", "-o"])
        .arg(&out)
        .write_stdin("Card: 1234 5678 9012 3456 and $5")
        .assert()
        .success();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
    assert_eq!(saved["credit_card"], serde_json::json!([]));
    assert_eq!(saved["currency"], serde_json::json!(["$5"]));
    Ok(())
}

#[test]
fn extract_rejects_oversized_input() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["-q", "extract", "-i", "-"])
        .write_stdin("x".repeat(10_001))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input exceeds maximum length"));
    assert!(!dir.path().join("sample_output.json").exists());
    Ok(())
}

#[test]
fn disabled_category_is_empty_but_present() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["-q", "extract", "-i", "-", "--json-stdout", "--no-save", "--disable", "hashtag"])
        .write_stdin("#Tag $1.00")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hashtag\": []"))
        .stdout(predicate::str::contains("\"$1.00\""));
    Ok(())
}

#[test]
fn summary_table_goes_to_stderr() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["-q", "extract", "-i", "-", "--json-stdout", "--no-save", "--summary"])
        .write_stdin("000-000-0000 555-123-4567")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dropped"))
        .stderr(predicate::str::contains("phone"));
    Ok(())
}

#[test]
fn custom_config_overrides_a_category() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("rules.yaml");
    fs::write(
        &config,
        "rules:\n  - category: currency\n    pattern: '€\\d+'\n",
    )?;
    datasift_in(&dir)
        .args(["-q", "extract", "-i", "-", "--json-stdout", "--no-save", "--config"])
        .arg(&config)
        .write_stdin("€20 and $30")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"€20\""))
        .stdout(predicate::str::contains("\"$30\"").not());
    Ok(())
}

#[test]
fn sanitize_command_strips_script_blocks() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["-q", "sanitize", "-i", "-"])
        .write_stdin("a<script type=\"x\">alert(1)</script>b javascript:c")
        .assert()
        .success()
        .stdout(predicate::eq("ab c"));
    Ok(())
}

#[test]
fn rules_command_lists_all_categories() -> Result<()> {
    let dir = tempdir()?;
    datasift_in(&dir)
        .args(["-q", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phone"))
        .stdout(predicate::str::contains("credit_card"))
        .stdout(predicate::str::contains("hashtag"))
        .stdout(predicate::str::contains("currency"));
    Ok(())
}

#[test]
fn no_arguments_prints_help() {
    let dir = tempdir().unwrap();
    datasift_in(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
