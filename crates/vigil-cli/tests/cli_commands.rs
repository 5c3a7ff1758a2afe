//! Integration tests for the vigil CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vigil() -> Command {
    Command::cargo_bin("vigil").unwrap()
}

/// A temp directory holding a fresh blank sheet named Mircea.
fn test_sheet() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("mircea.json");
    vigil()
        .args(["new", sheet.to_str().unwrap(), "--name", "Mircea"])
        .assert()
        .success();
    (dir, sheet)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn exec(sheet: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    vigil()
        .arg("exec")
        .arg(sheet)
        .args(args)
        .assert()
}

fn write_prompts(dir: &Path) -> PathBuf {
    let path = dir.join("prompts.json");
    fs::write(
        &path,
        r#"{
    "1": {"a": "You wake in a shallow grave."},
    "2": {"a": "A stranger knocks.", "b": "The stranger returns.", "c": "The stranger stays."}
}"#,
    )
    .unwrap();
    path
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_blank_sheet() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("sheet.json");
    vigil()
        .args(["new", sheet.to_str().unwrap(), "--name", "Mircea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").and(predicate::str::contains("Mircea")));

    let json = read_json(&sheet);
    assert_eq!(json["biography"]["name"], "Mircea");
    assert_eq!(json["memories"].as_array().unwrap().len(), 5);
    assert_eq!(json["prompts"]["current"], 1);
}

#[test]
fn new_refuses_to_overwrite() {
    let (_dir, sheet) = test_sheet();
    vigil()
        .args(["new", sheet.to_str().unwrap(), "--name", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    vigil()
        .args(["new", sheet.to_str().unwrap(), "--name", "Other", "--force"])
        .assert()
        .success();
    assert_eq!(read_json(&sheet)["biography"]["name"], "Other");
}

#[test]
fn new_requires_a_name() {
    let dir = TempDir::new().unwrap();
    vigil()
        .args(["new", dir.path().join("x.json").to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn new_from_creation_file() {
    let dir = TempDir::new().unwrap();
    let creation = dir.path().join("creation.json");
    fs::write(
        &creation,
        r#"{
    "mortalName": "Mircea",
    "era": "1450s",
    "experiences": ["a", "b", "c", "d", "e"],
    "mortals": [{"name": "Ana"}, {"name": "Radu"}, {"name": "Ion"}],
    "skills": ["Fencing", "Rowing", "Prayer"],
    "resources": [{"name": "The ferry", "stationary": true}, {"name": "Cross"}, {"name": "Boots"}],
    "immortal": {"name": "The Stranger"},
    "mark": "My shadow lags behind me"
}"#,
    )
    .unwrap();
    let sheet = dir.path().join("sheet.json");

    vigil()
        .args(["new", sheet.to_str().unwrap(), "--from", creation.to_str().unwrap()])
        .assert()
        .success();

    let json = read_json(&sheet);
    assert_eq!(json["biography"]["origin"], "Mircea's origin");
    assert_eq!(json["skills"].as_array().unwrap().len(), 3);
    assert_eq!(json["characters"].as_array().unwrap().len(), 4);
    assert_eq!(json["characters"][3]["relationship"], "creator");
}

#[test]
fn new_from_incomplete_creation_fails() {
    let dir = TempDir::new().unwrap();
    let creation = dir.path().join("creation.json");
    fs::write(
        &creation,
        r#"{"mortalName": "Mircea", "experiences": [], "mortals": [], "skills": [],
            "resources": [], "immortal": {"name": ""}, "mark": ""}"#,
    )
    .unwrap();

    vigil()
        .args([
            "new",
            dir.path().join("sheet.json").to_str().unwrap(),
            "--from",
            creation.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character creation"));
}

// ---------------------------------------------------------------------------
// exec
// ---------------------------------------------------------------------------

#[test]
fn exec_adds_and_saves() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["skill", "add", "Fencing"])
        .success()
        .stdout(predicate::str::contains("Gained the Skill: Fencing"));

    let json = read_json(&sheet);
    assert_eq!(json["skills"][0]["name"], "Fencing");
    assert_eq!(json["skills"][0]["checked"], false);
}

#[test]
fn exec_rename_keeps_birth_name() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["rename", "Brother", "Anselm"])
        .success()
        .stdout(predicate::str::contains("is now known as Brother Anselm"));

    let json = read_json(&sheet);
    assert_eq!(json["biography"]["currentName"], "Brother Anselm");
    assert_eq!(json["biography"]["name"], "Mircea");
}

#[test]
fn exec_roll_moves_prompt() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["--seed", "7", "roll"])
        .success()
        .stdout(predicate::str::contains("Rolled d10"));

    let json = read_json(&sheet);
    assert_eq!(json["prompts"]["history"].as_array().unwrap().len(), 1);
    assert!(json["prompts"]["current"].as_u64().unwrap() >= 1);
}

#[test]
fn exec_destructive_needs_yes() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["skill", "add", "Fencing"]).success();

    exec(&sheet, &["skill", "lose", "1"])
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert_eq!(read_json(&sheet)["skills"][0]["state"], "active");

    exec(&sheet, &["--yes", "skill", "lose", "1"])
        .success()
        .stdout(predicate::str::contains("Lost the Skill: Fencing"));
    assert_eq!(read_json(&sheet)["skills"][0]["state"], "lost");
}

#[test]
fn exec_reports_precondition_failures() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["memory", "diary", "1"])
        .failure()
        .stderr(predicate::str::contains("you have no diary"));

    exec(&sheet, &["--yes", "slot", "lose"]).success();
    let json = read_json(&sheet);
    assert_eq!(json["memorySlots"]["lost"], 1);
}

#[test]
fn exec_unknown_command_fails() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["dance"])
        .failure()
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn exec_with_custom_prompts() {
    let (dir, sheet) = test_sheet();
    let prompts = write_prompts(dir.path());
    let prompts = prompts.to_str().unwrap();

    exec(&sheet, &["--prompts", prompts, "goto", "2"])
        .success()
        .stdout(predicate::str::contains("Prompt 2a: A stranger knocks."));
    exec(&sheet, &["--prompts", prompts, "goto", "2"])
        .success()
        .stdout(predicate::str::contains("Prompt 2b: The stranger returns."));
    exec(&sheet, &["--prompts", prompts, "goto", "3"])
        .success()
        .stdout(predicate::str::contains("Unknown prompt."));
}

#[test]
fn exec_missing_sheet_fails() {
    let dir = TempDir::new().unwrap();
    exec(&dir.path().join("missing.json"), &["sheet"])
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_processes_stdin_and_saves() {
    let (_dir, sheet) = test_sheet();
    vigil()
        .args(["play", sheet.to_str().unwrap()])
        .write_stdin("mark add Cold skin\nwrite I remember the sea.\nbogus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Received a Mark: Cold skin")
                .and(predicate::str::contains("unknown command: bogus"))
                .and(predicate::str::contains("Goodbye!")),
        );

    let json = read_json(&sheet);
    assert_eq!(json["marks"][0]["description"], "Cold skin");
    assert_eq!(json["journal"][0]["content"], "I remember the sea.");
}

#[test]
fn play_confirms_destructive_commands() {
    let (_dir, sheet) = test_sheet();
    vigil()
        .args(["play", sheet.to_str().unwrap()])
        .write_stdin("memory strike 3\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot Memory 3."));

    assert_eq!(read_json(&sheet)["memories"][2]["state"], "struckOut");
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_lists_traits_and_counts() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["skill", "add", "Fencing"]).success();
    exec(&sheet, &["character", "add", "immortal", "The Stranger"]).success();

    vigil()
        .args(["show", sheet.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mircea")
                .and(predicate::str::contains("Fencing"))
                .and(predicate::str::contains("The Stranger"))
                .and(predicate::str::contains("Memory slots")),
        );
}

#[test]
fn show_blank_sheet() {
    let (_dir, sheet) = test_sheet();
    vigil()
        .args(["show", sheet.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No traits yet."));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_markdown_to_stdout() {
    let (_dir, sheet) = test_sheet();
    exec(&sheet, &["write", "I was born in Wallachia."]).success();

    vigil()
        .args(["export", sheet.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# The Journal of Mircea")
                .and(predicate::str::contains("## Prompt 1a"))
                .and(predicate::str::contains("I was born in Wallachia.")),
        );
}

#[test]
fn export_text_to_file() {
    let (dir, sheet) = test_sheet();
    exec(&sheet, &["write", "First night."]).success();
    let out = dir.path().join("journal.txt");

    vigil()
        .args([
            "export",
            sheet.to_str().unwrap(),
            "text",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("[Prompt 1a]"));
    assert!(content.contains("First night."));
}

#[test]
fn export_unsupported_format() {
    let (_dir, sheet) = test_sheet();
    vigil()
        .args(["export", sheet.to_str().unwrap(), "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
