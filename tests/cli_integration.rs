//! Integration tests for the bootsmith binary.
//!
//! These tests exercise the CLI end to end: argument parsing, config
//! loading, and the task pipelines behind each subcommand.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const GITIGNORE_BODY: &str = "build/\n";
const README_BODY: &str = "# Generated Project\n";

/// A populated template root.
fn template_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child("project_files/gitignore")
        .write_str(GITIGNORE_BODY)
        .unwrap();
    dir.child("component_files/README.md")
        .write_str(README_BODY)
        .unwrap();
    dir
}

/// The binary under test, isolated from any user-level config file.
fn bootsmith(target: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bootsmith").unwrap();
    cmd.env("BOOTSMITH_CONFIG", target.child("no-such-config.toml").path())
        .arg("--cwd")
        .arg(target.path());
    cmd
}

#[test]
fn init_seeds_and_reports_progress() {
    let template = template_root();
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .args(["init", "--template-root"])
        .arg(template.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing the master branch"));

    target.child(".git").assert(predicate::path::is_dir());
    target.child(".gitignore").assert(GITIGNORE_BODY);
    target.child("README.md").assert(README_BODY);
}

#[test]
fn init_without_template_root_fails() {
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no template root configured"));

    target.child(".git").assert(predicate::path::missing());
}

#[test]
fn init_reads_template_root_from_config_file() {
    let template = template_root();
    let target = TempDir::new().unwrap();
    let config = target.child("config.toml");
    config
        .write_str(&format!(
            "template_root = {:?}\n",
            template.path().display().to_string()
        ))
        .unwrap();

    Command::cargo_bin("bootsmith")
        .unwrap()
        .env("BOOTSMITH_CONFIG", config.path())
        .arg("--cwd")
        .arg(target.path())
        .arg("init")
        .assert()
        .success();

    target.child(".gitignore").assert(GITIGNORE_BODY);
}

#[test]
fn quiet_suppresses_progress() {
    let template = template_root();
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .args(["--quiet", "init", "--template-root"])
        .arg(template.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn commit_all_then_commit_all_again_fails() {
    let template = template_root();
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .args(["init", "--template-root"])
        .arg(template.path())
        .assert()
        .success();

    target.child("a.txt").write_str("a\n").unwrap();
    target.child("b.txt").write_str("b\n").unwrap();

    bootsmith(&target)
        .arg("commit-all")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Adding and committing files on the master branch",
        ));

    bootsmith(&target)
        .arg("commit-all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));
}

#[test]
fn checkout_discards_untracked_artifacts() {
    let template = template_root();
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .args(["init", "--template-root"])
        .arg(template.path())
        .assert()
        .success();

    target.child("junk.txt").write_str("junk\n").unwrap();
    target
        .child("build/artifact.bin")
        .write_str("ignored\n")
        .unwrap();

    bootsmith(&target).arg("checkout").assert().success();

    target.child("junk.txt").assert(predicate::path::missing());
    target
        .child("build/artifact.bin")
        .assert(predicate::path::exists());
}

#[test]
fn checkout_before_init_fails() {
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .arg("checkout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn completion_emits_script() {
    let target = TempDir::new().unwrap();

    bootsmith(&target)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bootsmith"));
}
