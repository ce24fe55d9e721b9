//! Integration tests for the `su` command-line interface.
#![allow(deprecated)] // Command::cargo_bin, macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small deck with the shipped scenario's shape: entry at 1,
/// summary at 22, closing at 38, and a pricing path through 28/33/17.
fn test_deck(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("deck.json");
    fs::write(
        &path,
        r#"[
  { "id": "1", "question": "A customer walks in. What do you say?", "answers": [
    { "id": 1, "text": "Good morning!", "category": "greeting", "points": "5", "next": 28 },
    { "id": 2, "text": "Hmpf.", "category": "greeting", "points": -3, "next": 28 }
  ] },
  { "id": 28, "question": "What do you offer?", "answers": [
    { "id": 1, "text": "The 599 package", "category": "proposal", "points": 10, "next": 33 }
  ] },
  { "id": 33, "question": "Anything on top?", "answers": [
    { "id": 2, "text": "Extended warranty", "category": "csus", "points": 2, "next": 17 },
    { "id": 3, "text": "Nothing", "category": "csus", "points": 0, "next": 17 }
  ] },
  { "id": 17, "question": "Close the deal?", "answers": [
    { "id": 1, "text": "Deal!", "category": "closing", "points": 15, "next": 22 },
    { "id": 2, "text": "Think it over", "category": "closing", "points": 1, "next": 99 }
  ] },
  { "id": 22, "question": "Final score" },
  { "id": 38, "question": "Day closed" }
]"#,
    )
    .unwrap();
    path
}

fn test_rules(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{
  "proposal": [
    { "slide": 28, "answer": 1, "op": { "Set": 599 } },
    { "slide": 33, "answer": 2, "op": { "Add": 49 } }
  ],
  "sale": [
    { "slide": 17, "answer": 1 }
  ]
}"#,
    )
    .unwrap();
    path
}

fn su() -> Command {
    Command::cargo_bin("su").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_counts() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["check", deck.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6 slides")
                .and(predicate::str::contains("7 answers"))
                .and(predicate::str::contains("dangling")),
        );
}

#[test]
fn check_fails_on_missing_entry() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["check", deck.to_str().unwrap(), "--entry", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry slide 99 not found"));
}

#[test]
fn check_fails_on_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[ { not json").unwrap();
    su().args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load deck"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_lists_slides_and_answers() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["show", deck.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Good morning!")
                .and(predicate::str::contains("greeting"))
                .and(predicate::str::contains("6 slides")),
        );
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_produces_session_record() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args([
        "run",
        deck.to_str().unwrap(),
        "--answers",
        "1,1,2,1",
        "--owner",
        "tester",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("\"owner_id\": \"tester\"")
            .and(predicate::str::contains("\"rating\": \"Beginner\""))
            .and(predicate::str::contains("\"total\": 32"))
            .and(predicate::str::contains("\"selectedAnswer\": \"Good morning!\"")),
    );
}

#[test]
fn run_applies_pricing_rules() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    let rules = test_rules(&dir);
    su().args([
        "run",
        deck.to_str().unwrap(),
        "--answers",
        "1,1,2,1",
        "--rules",
        rules.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("\"total_sales\": 648")
            .and(predicate::str::contains("\"sales_made\": 1")),
    )
    .stderr(predicate::str::contains("lifetime: 1 sale(s), 648 total"));
}

#[test]
fn run_short_script_still_records() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["run", deck.to_str().unwrap(), "--answers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": -3"));
}

#[test]
fn run_rejects_unknown_answer() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["run", deck.to_str().unwrap(), "--answers", "1,9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("answer 9 not found on slide 28"));
}

#[test]
fn run_rejects_garbage_script() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    su().args(["run", deck.to_str().unwrap(), "--answers", "1,x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid answer id"));
}

#[test]
fn run_surfaces_question_not_found() {
    let dir = TempDir::new().unwrap();
    let deck = test_deck(&dir);
    // 17/2 points at missing slide 99.
    su().args(["run", deck.to_str().unwrap(), "--answers", "1,1,2,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question not found"));
}
