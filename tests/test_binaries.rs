//! Integration tests for the rscodec binary
//!
//! Runs the compiled executable and checks its output and exit status for
//! each subcommand.

use std::process::{Command, Output};

/// Run rscodec with the given arguments
fn rscodec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rscodec"))
        .args(args)
        .output()
        .expect("Failed to execute rscodec")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Help and usage
// =============================================================================

#[test]
fn test_help() {
    let output = rscodec(&["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Reed-Solomon"));
    assert!(text.contains("encode"));
    assert!(text.contains("correct"));
    assert!(text.contains("check"));
    assert!(text.contains("--parity"));
}

#[test]
fn test_version() {
    let output = rscodec(&["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("rscodec"));
}

#[test]
fn test_correct_alias_help() {
    let output = rscodec(&["c", "--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--data-len"));
}

#[test]
fn test_missing_parity_is_an_error() {
    let output = rscodec(&["encode", "8ea4ba"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--parity is required"));
}

#[test]
fn test_bad_hex_is_rejected() {
    let output = rscodec(&["encode", "-n", "5", "8ea"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid hex block"));
}

#[test]
fn test_non_primitive_polynomial_is_rejected() {
    let output = rscodec(&["encode", "-n", "5", "-p", "0x100", "8ea4ba"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to configure codec"));
}

// =============================================================================
// encode
// =============================================================================

#[test]
fn test_encode_annexe_r() {
    let output = rscodec(&["encode", "-n", "5", "8ea4ba"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "8ea4ba7219055866");
}

#[test]
fn test_encode_with_root_offset() {
    let output = rscodec(&["e", "-n", "5", "-o", "42", "8ea4ba"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "8ea4baba60a37312");
}

#[test]
fn test_encode_data_too_long() {
    let data = "00".repeat(251);
    let output = rscodec(&["encode", "-n", "5", &data]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to encode block"));
}

// =============================================================================
// correct
// =============================================================================

#[test]
fn test_correct_single_error() {
    let output = rscodec(&["correct", "-n", "5", "-d", "3", "8e00ba7219055866"]);

    assert!(output.status.success());
    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("8ea4ba7219055866"));
    assert_eq!(lines.next(), Some("Corrected 1 symbol(s)"));
}

#[test]
fn test_correct_clean_block() {
    let output = rscodec(&["correct", "-n", "5", "--data-len", "3", "8ea4ba7219055866"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Corrected 0 symbol(s)"));
}

#[test]
fn test_correct_uncorrectable_block() {
    let output = rscodec(&["correct", "-n", "5", "-d", "3", "04a4ba1319015866"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Uncorrectable"));
}

#[test]
fn test_correct_short_block() {
    let output = rscodec(&["correct", "-n", "5", "-d", "4", "8ea4ba7219055866"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to correct block"));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn test_check_valid_codeword() {
    let output = rscodec(&["check", "-n", "5", "-d", "3", "8ea4ba7219055866"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Valid codeword");
}

#[test]
fn test_check_detects_errors() {
    let output = rscodec(&["check", "-n", "5", "-d", "3", "8ea4ba7219055867"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output).trim(), "Errors detected");
}

#[test]
fn test_wide_field_needs_wide_symbols() {
    let output = rscodec(&["encode", "-n", "4", "-p", "0x1053", "8ea4ba"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot hold 12-bit field symbols"));
}
