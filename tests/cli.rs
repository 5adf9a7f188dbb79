//! Integration tests for top-level CLI behavior.

use std::collections::HashSet;
use std::process::{Command, Output};

fn wallstag() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wallstag"));
    cmd.env_remove("WALLSTAG_RECORD")
        .env_remove("WALLSTAG_SEED")
        .env_remove("WALLSTAG_TAKEN")
        .env_remove("WALLSTAG_MAX_ATTEMPTS");
    cmd
}

fn run_wallstag(args: &[&str]) -> Output {
    wallstag().args(args).output().expect("failed to run wallstag binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

#[test]
fn generate_prints_requested_tags() {
    let output = run_wallstag(&["generate", "Sandy Beach", "-l", "5", "-n", "4", "--seed", "7"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|tag| tag.chars().count() == 5));
    let distinct: HashSet<&String> = lines.iter().collect();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn generate_with_same_seed_is_reproducible() {
    let args = ["generate", "Pine Ridge", "-l", "6", "-n", "5", "--seed", "42"];
    let first = run_wallstag(&args);
    let second = run_wallstag(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn generate_skips_tags_listed_in_taken_file() {
    let args = ["generate", "Harbor", "-l", "4", "-n", "3", "--seed", "11"];
    let first = stdout_lines(&run_wallstag(&args));
    assert_eq!(first.len(), 3);

    let dir = std::env::temp_dir().join("wallstag_cli_taken_test");
    std::fs::create_dir_all(&dir).unwrap();
    let taken = dir.join("taken.txt");
    std::fs::write(&taken, first.join("\n")).unwrap();

    let mut with_taken = args.to_vec();
    with_taken.extend(["--taken", taken.to_str().unwrap()]);
    let output = run_wallstag(&with_taken);
    assert!(output.status.success());
    for tag in stdout_lines(&output) {
        assert!(!first.contains(&tag), "{tag} was listed as taken");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn generate_json_reports_batch() {
    let output = run_wallstag(&["generate", "x", "-l", "3", "-n", "2", "--seed", "1", "--json"]);
    assert!(output.status.success());

    let batch: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(batch["requested"], 2);
    assert_eq!(batch["complete"], true);
    assert_eq!(batch["tags"].as_array().unwrap().len(), 2);
}

#[test]
fn strict_generate_fails_when_budget_is_exhausted() {
    let output =
        run_wallstag(&["generate", "Lake", "-n", "2", "--max-attempts", "0", "--strict"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Found only 0 of 2 tags"));
}

#[test]
fn short_batch_without_strict_still_succeeds() {
    let output = wallstag()
        .args(["generate", "Lake", "-n", "2", "--max-attempts", "0"])
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run wallstag binary");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found only 0 of 2 tags after 0 attempts"), "stderr: {stderr}");
}

#[test]
fn derive_prints_every_window_when_count_is_large() {
    let output = run_wallstag(&["derive", "Sandy Beach", "-l", "4", "-n", "20", "--seed", "3"]);
    assert!(output.status.success());

    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines, ["andy", "beac", "dybe", "each", "ndyb", "sand", "ybea"]);
}

#[test]
fn word_prints_one_word() {
    let output = run_wallstag(&["word", "--seed", "5"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].is_empty());
}

#[test]
fn zero_length_is_rejected() {
    let output = run_wallstag(&["generate", "Lake", "--length", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("must be at least 1"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_wallstag(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
