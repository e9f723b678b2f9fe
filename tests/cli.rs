//! Command line tests for the punygen binary

use assert_cmd::Command;
use predicates::prelude::*;

fn punygen() -> Command {
    let mut cmd = Command::cargo_bin("punygen").unwrap();
    cmd.env_remove("PUNYGEN_FORMAT")
        .env_remove("PUNYGEN_MAX_COMBINATIONS")
        .env_remove("PUNYGEN_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    punygen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--letter"))
        .stdout(predicate::str::contains("FORMATS:"));
}

#[test]
fn test_missing_input_is_usage_error() {
    punygen()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please provide input via -l, -w, or -s"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_conflicting_input_is_usage_error() {
    punygen()
        .args(["-l", "a", "-w", "test"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Only one input method allowed at a time"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    punygen()
        .args(["-w", "test", "-f", "xml"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_letter_simple() {
    punygen()
        .args(["-l", "a"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("xn--"));
}

#[test]
fn test_letter_without_homoglyphs() {
    punygen()
        .args(["-l", "7"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No homoglyphs found for letter: 7"));
}

#[test]
fn test_word_cap_one() {
    punygen()
        .args(["-w", "test", "-m", "1"])
        .assert()
        .success()
        .stdout("test\n")
        .stderr(predicate::str::contains("limiting to 1"));
}

#[test]
fn test_word_negative_max() {
    punygen()
        .args(["-w", "test", "-m", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_word_detailed() {
    punygen()
        .args(["--word", "test", "--format", "detailed", "--max", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Punycode variants for word: 'test'"))
        .stdout(predicate::str::contains("test -> test"))
        .stdout(predicate::str::contains("Total combinations: 3"));
}

#[test]
fn test_word_json() {
    let output = punygen()
        .args(["-w", "go", "-f", "json", "-m", "5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["word"], "go");
    assert_eq!(value["total"], 5);
    assert_eq!(value["variants"][0], "go");
}

#[test]
fn test_env_default_format() {
    let output = punygen()
        .env("PUNYGEN_FORMAT", "json")
        .args(["-l", "b"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["letter"], "b");
}

#[test]
fn test_stdin_lines() {
    punygen()
        .args(["-s", "-m", "1"])
        .write_stdin("\nhello\n\nworld\n")
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn test_stdin_invalid_utf8_fails() {
    punygen()
        .args(["-s", "-m", "1"])
        .write_stdin(&b"hello\n\xff\xfe\n"[..])
        .assert()
        .code(1)
        .stdout("hello\n")
        .stderr(predicate::str::contains("Error reading input"));
}

#[test]
fn test_invalid_env_setting_is_usage_error() {
    punygen()
        .env("PUNYGEN_MAX_COMBINATIONS", "lots")
        .args(["-w", "test"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration problem"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_letter_output_is_all_ace_labels() {
    let output = punygen().args(["-l", "a"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().count() > 0);
    for line in stdout.lines() {
        assert!(line.starts_with("xn--"), "bare label in letter output: {}", line);
    }
}

#[test]
fn test_word_output_repeats_the_word_once() {
    let output = punygen().args(["-w", "test", "-m", "30"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 30);
    assert_eq!(lines[0], "test");
    for line in &lines[1..] {
        assert!(line.starts_with("xn--"), "bare label in word output: {}", line);
    }
}
