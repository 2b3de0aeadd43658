use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TWO_POINTS: &str = r#"{
    "num_points": 2,
    "parameters": {
        "initial_shear_stress": [81.6e6, 70e6],
        "initial_normal_stress": [-120e6, -120e6]
    }
}"#;

fn rupture() -> Command {
    Command::cargo_bin("rupture").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config(dir: &TempDir, body: &str) -> PathBuf {
    write(dir.path(), "rupture.toml", &format!("{body}\n[logging]\nlevel = \"warn\"\n"))
}

#[test]
fn list_shows_every_code_with_its_policy() {
    rupture()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("LinearSlipWeakening"))
        .stdout(predicate::str::contains("RateAndStateFastVelocityWeakening"))
        .stdout(predicate::str::contains("ThermalPressurisation"))
        .stdout(predicate::str::contains("disabled"))
        .stdout(predicate::str::contains("103"));
}

#[test]
fn check_reports_the_selected_family() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 2");

    rupture()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Family:          LinearSlipWeakening"))
        .stdout(predicate::str::contains("initial_shear_stress"));
}

#[test]
fn check_honours_the_thermal_flag() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 103\nthermal_pressurisation = true");

    rupture()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Family:          ThermalPressurisation"));
}

#[test]
fn check_rejects_a_disabled_law() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 7");

    rupture()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled"));
}

#[test]
fn check_rejects_an_unknown_code() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 42");

    rupture()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("42"));
}

#[test]
fn check_fails_without_a_config_file() {
    let dir = TempDir::new().unwrap();

    rupture()
        .args(["check", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn run_prints_the_final_frame_as_json() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 2");
    let input = write(dir.path(), "fault.json", TWO_POINTS);

    let output = rupture()
        .args(["run", "--steps", "10", "--dt", "0.01", "--config"])
        .arg(&path)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slip_rate\""))
        .get_output()
        .stdout
        .clone();

    let frame: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(frame["points"], 2);
}

#[test]
fn run_reports_missing_input_parameters() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 2");
    let input = write(dir.path(), "fault.json", r#"{ "num_points": 2, "parameters": {} }"#);

    rupture()
        .args(["run", "--config"])
        .arg(&path)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial_shear_stress"));
}

#[test]
fn run_rejects_a_non_positive_time_step() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 0");
    let input = write(dir.path(), "fault.json", TWO_POINTS);

    rupture()
        .args(["run", "--dt", "0", "--config"])
        .arg(&path)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dt must be positive"));
}

#[test]
fn environment_overrides_the_config_file() {
    let dir = TempDir::new().unwrap();
    let path = config(&dir, "friction_law = 2");

    rupture()
        .env("RUPTURE__FRICTION_LAW", "4")
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Family:          RateAndStateSlip"));
}
