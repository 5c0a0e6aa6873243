use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("gitopsctl").unwrap()
}

#[test]
fn environment_add_requires_env_name_flag() {
    cli()
        .args(["environment", "add", "--pipelines-folder", "pipelines"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--env-name"));
}

#[test]
fn environment_add_requires_pipelines_folder_flag() {
    cli()
        .args(["environment", "add", "--env-name", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pipelines-folder"));
}

#[test]
fn environment_add_rejects_invalid_environment_name() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .args(["environment", "add", "--env-name", "Bad_Name", "--pipelines-folder"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad_Name"));
}

#[test]
fn environment_add_rejects_missing_pipelines_folder() {
    cli()
        .args([
            "environment",
            "add",
            "--env-name",
            "staging",
            "--pipelines-folder",
            "does-not-exist",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn environment_add_accepts_valid_environment() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .args(["environment", "add", "--env-name", "staging", "--pipelines-folder"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));
}
