//! Integration tests driving the `bearlint` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bearlint(root: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_bearlint");
    Command::new(bin)
        .env_remove("BEARLINT_LOG")
        .env("HOME", root.join("home"))
        .env("XDG_CONFIG_HOME", root.join("config"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .unwrap()
}

/// Run from inside `dir` with the default root of `.`.
fn bearlint_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_bearlint");
    Command::new(bin)
        .current_dir(dir)
        .env_remove("BEARLINT_LOG")
        .env("HOME", dir.join("home"))
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .args(args)
        .output()
        .unwrap()
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("dirty.txt"), "#fixme  \n").unwrap();
    fs::write(dir.path().join("clean.txt"), "all good\n").unwrap();
    dir
}

#[test]
fn test_json_results_and_exit_code() {
    let dir = workspace();
    let output = bearlint(
        dir.path(),
        &["-c", "/dev/null", "--json", "-f", "dirty.txt", "-b", "KeywordBear"],
    );

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = value["results"]["cli"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0]["message"],
        "The line contains the keyword 'FIXME'."
    );
}

#[test]
fn test_clean_file_exits_zero() {
    let dir = workspace();
    let output = bearlint(
        dir.path(),
        &["-c", "/dev/null", "--no-color", "-f", "clean.txt", "-b", "KeywordBear"],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 result(s) in 1 file(s)"), "stdout={}", stdout);
}

#[test]
fn test_debug_failure_prints_post_mortem_then_fails() {
    let dir = workspace();
    let output = bearlint(
        dir.path(),
        &["-c", "/dev/null", "--debug", "-f", "dirty.txt", "-b", "GhostBear"],
    );

    assert_eq!(output.status.code(), Some(255));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bearlint --debug: unhandled error"), "stderr={}", stderr);
    assert_eq!(
        stderr.matches("bearlint --debug: unhandled error").count(),
        1,
        "inspection should happen exactly once"
    );
    assert!(stderr.contains("No bear named 'GhostBear'"));
}

#[test]
fn test_failure_without_debug_has_no_post_mortem() {
    let dir = workspace();
    let output = bearlint(
        dir.path(),
        &["-c", "/dev/null", "-f", "dirty.txt", "-b", "GhostBear"],
    );

    assert_eq!(output.status.code(), Some(255));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("unhandled error"));
    assert!(stderr.contains("No bear named 'GhostBear'"));
}

#[test]
fn test_json_output_file() {
    let dir = workspace();
    let out = dir.path().join("report.json");
    let out_arg = out.to_string_lossy().into_owned();
    let output = bearlint(
        dir.path(),
        &[
            "-c",
            "/dev/null",
            "--json",
            "-o",
            out_arg.as_str(),
            "-f",
            "*.txt",
            "-b",
            "SpaceConsistencyBear",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["results"]["cli"].as_array().unwrap().len(), 1);
}

#[test]
fn test_project_config_sections() {
    let dir = workspace();
    fs::write(
        dir.path().join("bearlint.toml"),
        r#"
[sections.text]
files = ["*.txt"]
bears = ["LineLengthBear"]

[sections.text.settings]
max_line_length = 4
"#,
    )
    .unwrap();

    let output = bearlint(dir.path(), &["--json"]);

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"]["text"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_bears() {
    let dir = workspace();
    let output = bearlint(dir.path(), &["-c", "/dev/null", "--show-bears"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KeywordBear"));
    assert!(stdout.contains("SpaceConsistencyBear"));
}

#[test]
fn test_default_root_applies_ignore_and_dedups() {
    let dir = workspace();
    fs::write(dir.path().join("also_dirty.txt"), "#todo\n").unwrap();

    let output = bearlint_in(
        dir.path(),
        &[
            "-c",
            "/dev/null",
            "--json",
            "-f",
            "*.txt",
            "-f",
            "dirty.txt",
            "-i",
            "also_dirty.txt",
            "-b",
            "KeywordBear",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = value["results"]["cli"].as_array().unwrap();
    assert_eq!(results.len(), 1, "stdout={}", String::from_utf8_lossy(&output.stdout));
    assert_eq!(results[0]["file"], "dirty.txt");
}
