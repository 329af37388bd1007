//! End-to-end tests for the `fair-rps` and `fair-rps-verify` binaries.
//!
//! Each test runs the real executable with piped stdin and inspects its
//! output and exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_game(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fair-rps"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FAIR_RPS_KEY_BYTES")
        .env_remove("FAIR_RPS_TRANSCRIPT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start fair-rps");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn run_verify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fair-rps-verify"))
        .args(args)
        .output()
        .expect("Failed to start fair-rps-verify")
}

fn line_value<'a>(stdout: &'a str, label: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|line| {
            line.trim_start_matches("Enter your move: ")
                .strip_prefix(label)
        })
        .unwrap_or_else(|| panic!("no {label:?} line in:\n{stdout}"))
}

#[test]
fn test_rejects_even_move_count() {
    let output = run_game(&["rock", "paper", "scissors", "lizard"], "");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("Example usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_rejects_too_few_moves() {
    let output = run_game(&["rock"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 3 moves"));
}

#[test]
fn test_rejects_duplicates() {
    let output = run_game(&["rock", "paper", "rock"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("more than once"));
}

#[test]
fn test_exit_command() {
    let output = run_game(&["rock", "paper", "scissors"], "0\n");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("HMAC: "));
    assert!(stdout.ends_with("Enter your move: "));
    assert!(!stdout.contains("HMAC key"));
}

#[test]
fn test_full_round_is_verifiable() {
    let output = run_game(&["rock", "paper", "scissors"], "99\n?\n1\n");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid input: \"99\""));
    assert!(stdout.contains("| rock         | Draw | Lose  | Win      |"));
    assert_eq!(line_value(&stdout, "Your move: "), "rock");

    let hmac = line_value(&stdout, "HMAC: ");
    let key = line_value(&stdout, "HMAC key: ");
    let computer_move = line_value(&stdout, "Computer move: ");

    let verified = run_verify(&["--hmac", hmac, "--key", key, computer_move]);
    assert_eq!(verified.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&verified.stdout).starts_with("OK"));

    let other = ["rock", "paper", "scissors"]
        .into_iter()
        .find(|m| *m != computer_move)
        .unwrap();
    let tampered = run_verify(&["--hmac", hmac, "--key", key, other]);
    assert_eq!(tampered.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&tampered.stdout).starts_with("MISMATCH"));
}

#[test]
fn test_transcript_is_verifiable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.json");
    let path_str = path.to_str().unwrap();

    let output = run_game(
        &["--transcript", path_str, "rock", "paper", "scissors", "lizard", "spock"],
        "3\n",
    );
    assert_eq!(output.status.code(), Some(0));

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"human_move\": \"scissors\""));

    let verified = run_verify(&["--transcript", path_str]);
    assert_eq!(verified.status.code(), Some(0));
}

#[test]
fn test_no_transcript_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.json");

    let output = run_game(
        &["--transcript", path.to_str().unwrap(), "a", "b", "c"],
        "0\n",
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(!path.exists());
}

#[test]
fn test_verify_rejects_bad_hex() {
    let output = run_verify(&["--hmac", "not-hex", "--key", "00", "rock"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid --hmac"));
}
