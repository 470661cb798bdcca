//! CLI integration tests
//!
//! Runs each binary end to end: argument parsing, the library call and the
//! stdout / stderr / exit status contract.

use std::process::{Command, Output};

// =============================================================================
// Helpers
// =============================================================================

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to spawn binary")
}

/// Assert success and return trimmed stdout
fn stdout_of(bin: &str, args: &[&str]) -> String {
    let output = run(bin, args);
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Assert exit status 1 with an `Error:` line on stderr
fn assert_rejected(bin: &str, args: &[&str]) {
    let output = run(bin, args);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "{:?}: stderr={}", args, stderr);
    assert!(stderr.starts_with("Error:"), "{:?}: stderr={}", args, stderr);
    assert!(output.stdout.is_empty(), "{:?} printed a result", args);
}

const EULER_001: &str = env!("CARGO_BIN_EXE_euler_001");
const EULER_002: &str = env!("CARGO_BIN_EXE_euler_002");
const NTH_FIBONACCI: &str = env!("CARGO_BIN_EXE_nth_fibonacci");
const FACTORS: &str = env!("CARGO_BIN_EXE_factors");

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_euler_001_default_limit() {
    assert_eq!(stdout_of(EULER_001, &[]), "233168");
    assert_eq!(stdout_of(EULER_001, &["--filter"]), "233168");
}

#[test]
fn test_euler_001_explicit_limit() {
    assert_eq!(stdout_of(EULER_001, &["10"]), "23");
    assert_eq!(stdout_of(EULER_001, &["10", "--filter"]), "23");
    assert_eq!(stdout_of(EULER_001, &["0"]), "0");
}

#[test]
fn test_euler_002_default_limit() {
    assert_eq!(stdout_of(EULER_002, &[]), "4613732");
    assert_eq!(stdout_of(EULER_002, &["100"]), "44");
}

#[test]
fn test_nth_fibonacci() {
    assert_eq!(stdout_of(NTH_FIBONACCI, &["35"]), "9227465");
    assert_eq!(stdout_of(NTH_FIBONACCI, &["0"]), "0");
    assert_eq!(stdout_of(NTH_FIBONACCI, &["10.0"]), "55");
}

#[test]
fn test_factors() {
    assert_eq!(stdout_of(FACTORS, &["12"]), "1 2 3 4 6 12");
    assert_eq!(stdout_of(FACTORS, &["60", "--prime"]), "2 3 5");
    assert_eq!(stdout_of(FACTORS, &["--prime", "100"]), "2 5");
}

// =============================================================================
// Rejected input
// =============================================================================

#[test]
fn test_negative_input_reaches_validation() {
    assert_rejected(NTH_FIBONACCI, &["-1"]);
    assert_rejected(FACTORS, &["-12"]);
    assert_rejected(EULER_001, &["-1"]);
    assert_rejected(EULER_002, &["-5"]);

    let stderr = String::from_utf8_lossy(&run(NTH_FIBONACCI, &["-1"]).stderr).to_string();
    assert!(stderr.contains("nth_fibonacci()"), "stderr={}", stderr);
    assert!(stderr.contains(">= 0"), "stderr={}", stderr);
}

#[test]
fn test_fractional_input_rejected() {
    assert_rejected(NTH_FIBONACCI, &["2.5"]);
    assert_rejected(FACTORS, &["2.5", "--prime"]);
    assert_rejected(EULER_001, &["2.5"]);
}

#[test]
fn test_non_numeric_input_rejected() {
    assert_rejected(NTH_FIBONACCI, &["abc"]);
    assert_rejected(FACTORS, &["abc"]);
    assert_rejected(EULER_002, &["abc"]);
}

#[test]
fn test_prime_factors_below_two_rejected() {
    assert_rejected(FACTORS, &["1", "--prime"]);
    assert_eq!(stdout_of(FACTORS, &["1"]), "1");
}
