#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const VALID: &str = "\
id: prod
shifts:
  2025-01-01T00:00:00Z: a@example.com
  2025-01-08T00:00:00Z: b@example.com
  2025-01-15T00:00:00Z: TBD
";

fn cli() -> Command {
    Command::cargo_bin("releve-cli").unwrap()
}

#[test]
fn check_accepts_a_valid_schedule() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.yml");
    std::fs::write(&path, VALID).unwrap();

    cli()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("is ok"));
}

#[test]
fn check_reports_aggregated_violations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.yml");
    std::fs::write(
        &path,
        "extend:\n  minDays: 3\n  maxDays: 2\n  users: []\nshifts: []\n",
    )
    .unwrap();

    cli()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("schedule is missing `id` field"))
        .stderr(predicate::str::contains(
            "extend.minDays must be less than extend.maxDays",
        ));
}

#[test]
fn fmt_rewrites_the_canonical_form() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("schedule.yml");
    let output = dir.path().join("out.yml");
    std::fs::write(&input, VALID).unwrap();

    cli()
        .args([
            "fmt",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("TBD"));
    assert!(written.contains("a@example.com"));
}

#[test]
fn export_writes_a_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("schedule.yml");
    let csv = dir.path().join("shifts.csv");
    std::fs::write(&input, VALID).unwrap();

    cli()
        .args([
            "export",
            input.to_str().unwrap(),
            "--csv",
            csv.to_str().unwrap(),
        ])
        .assert()
        .success();

    let out = std::fs::read_to_string(&csv).unwrap();
    assert!(out.starts_with("email,start,end"));
}

#[test]
fn sync_requires_the_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.yml");
    std::fs::write(&path, VALID).unwrap();

    cli()
        .env_remove("PD_TOKEN")
        .args(["sync", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PD_TOKEN"));
}
