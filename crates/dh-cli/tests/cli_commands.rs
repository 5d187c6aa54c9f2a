//! Integration tests for the dh-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn dh() -> Command {
    let mut cmd = Command::cargo_bin("dh").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Run a command that prints `--json` output and parse it.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn int(v: &Value, key: &str) -> i64 {
    v[key].as_i64().unwrap_or_else(|| panic!("missing {key} in {v}"))
}

/// Create a temp directory holding a character sheet.
fn sheet_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("marlowe.json"),
        r#"{
    "name": "Marlowe",
    "level": 2,
    "traits": { "agility": 14, "presence": 8 },
    "hope": 2
}
"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_json_totals_follow_the_rules() {
    let v = json_output(dh().args(["roll", "2", "--hope", "1", "--seed", "7", "--json"]));
    let hope = int(&v, "hope_face");
    let fear = int(&v, "fear_face");
    assert!((1..=12).contains(&hope));
    assert!((1..=12).contains(&fear));
    assert_eq!(int(&v, "hope_total"), hope + 2 + 1);
    assert_eq!(int(&v, "fear_total"), fear + 2);
    assert_eq!(int(&v, "difficulty"), 12);

    let side = v["side"].as_str().unwrap();
    if int(&v, "hope_total") > int(&v, "fear_total") {
        assert_eq!(side, "hope");
    } else {
        assert_eq!(side, "fear");
    }
    assert!(v["outcome"].as_str().is_some());
}

#[test]
fn roll_same_seed_same_result() {
    let a = json_output(dh().args(["roll", "1", "--seed", "42", "--json"]));
    let b = json_output(dh().args(["roll", "1", "--seed", "42", "--json"]));
    assert_eq!(a, b);
}

#[test]
fn roll_negative_modifier_and_difficulty() {
    let v = json_output(dh().args(["roll", "-3", "-d", "5", "-s", "1", "--json"]));
    assert_eq!(int(&v, "modifier"), -3);
    assert_eq!(int(&v, "difficulty"), 5);
    assert_eq!(int(&v, "hope_total"), int(&v, "hope_face") - 3);
}

#[test]
fn roll_text_report() {
    dh().args(["roll", "1", "--seed", "3", "--flavor", "Leap the chasm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leap the chasm"))
        .stdout(predicate::str::contains("Hope"))
        .stdout(predicate::str::contains("Fear"))
        .stdout(predicate::str::contains("Modifier:     +1"))
        .stdout(predicate::str::contains("vs 12"));
}

#[test]
fn roll_reports_hope_spent() {
    dh().args(["roll", "--hope", "2", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hope Spent:   +2"));
}

#[test]
fn roll_rejects_nan_modifier() {
    dh().args(["roll", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn roll_rejects_fractional_difficulty() {
    dh().args(["roll", "0", "--difficulty", "11.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty must be an integer"));
}

#[test]
fn roll_rejects_negative_hope() {
    dh().args(["roll", "--hope", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bonus must be non-negative"));
}

#[test]
fn roll_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("dh.json");
    fs::write(&config, r#"{ "seed": 11, "default_difficulty": 15 }"#).unwrap();

    let a = json_output(dh().args(["roll", "--json", "--config"]).arg(&config));
    let b = json_output(dh().args(["roll", "--json", "--seed", "11", "-d", "15"]));
    assert_eq!(int(&a, "difficulty"), 15);
    assert_eq!(a, b);
}

#[test]
fn roll_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("dh.json");
    fs::write(&config, r#"{ "seed": "eleven" }"#).unwrap();

    dh().args(["roll", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

// ---------------------------------------------------------------------------
// trait
// ---------------------------------------------------------------------------

#[test]
fn trait_roll_applies_trait_modifier() {
    let dir = sheet_dir();
    let v = json_output(
        dh().arg("trait")
            .arg(dir.path().join("marlowe.json"))
            .args(["agility", "--seed", "5", "--json"]),
    );
    assert_eq!(int(&v, "modifier"), 2);
    assert_eq!(int(&v, "hope_total"), int(&v, "hope_face") + 2);
}

#[test]
fn trait_roll_stacks_situational_modifier() {
    let dir = sheet_dir();
    let v = json_output(
        dh().arg("trait")
            .arg(dir.path().join("marlowe.json"))
            .args(["presence", "-m", "3", "--seed", "5", "--json"]),
    );
    assert_eq!(int(&v, "modifier"), 2);
}

#[test]
fn trait_roll_spends_hope() {
    let dir = sheet_dir();
    dh().arg("trait")
        .arg(dir.path().join("marlowe.json"))
        .args(["Agility", "--hope", "1", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marlowe"))
        .stdout(predicate::str::contains("Hope Spent:   +1"))
        .stdout(predicate::str::contains("Hope: 1/6"));
}

#[test]
fn trait_roll_json_reports_hope_left() {
    let dir = sheet_dir();
    let v = json_output(
        dh().arg("trait")
            .arg(dir.path().join("marlowe.json"))
            .args(["agility", "--hope", "1", "--seed", "5", "--json"]),
    );
    assert_eq!(int(&v, "bonus"), 1);
    assert_eq!(int(&v, "hope_left"), 1);
}

#[test]
fn roll_json_has_no_hope_left() {
    let v = json_output(dh().args(["roll", "--hope", "1", "--seed", "5", "--json"]));
    assert!(v.get("hope_left").is_none());
}

#[test]
fn trait_roll_insufficient_hope() {
    let dir = sheet_dir();
    dh().arg("trait")
        .arg(dir.path().join("marlowe.json"))
        .args(["agility", "--hope", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough Hope"));
}

#[test]
fn trait_roll_unknown_trait() {
    let dir = sheet_dir();
    dh().arg("trait")
        .arg(dir.path().join("marlowe.json"))
        .arg("luck")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trait: luck"));
}

#[test]
fn trait_roll_missing_sheet() {
    let dir = TempDir::new().unwrap();
    dh().arg("trait")
        .arg(dir.path().join("nobody.json"))
        .arg("agility")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read sheet"));
}
