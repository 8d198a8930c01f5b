//! Integration tests for the Git client.
//!
//! These tests run the client against real repositories created under
//! tempfile. The git CLI is used only to arrange fixtures and assert on
//! repository state; every mutation under test goes through the client.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use bootsmith::core::types::BranchName;
use bootsmith::git::{Git, GitError, StageOptions, VcsClient};

/// Test fixture wrapping a scratch project directory.
///
/// Deliberately does not configure a committer identity, so commits
/// exercise the client's fallback signature on machines without one.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn git(&self) -> Git {
        Git::new(self.path().to_path_buf())
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn master() -> BranchName {
        BranchName::new("master").unwrap()
    }
}

/// Run a git command in the given directory and return its stdout.
fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed to spawn");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8(output.stdout).unwrap()
}

/// Names of entries in HEAD's tree, sorted.
fn head_tree(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = run_git(dir, &["ls-tree", "--name-only", "-r", "HEAD"])
        .lines()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn init_creates_repository() {
    let project = TestProject::new();

    project.git().init().unwrap();

    assert!(project.path().join(".git").is_dir());
}

#[test]
fn init_pins_head_to_master() {
    let project = TestProject::new();

    project.git().init().unwrap();

    let head = run_git(project.path(), &["symbolic-ref", "HEAD"]);
    assert_eq!(head.trim(), "refs/heads/master");
}

#[test]
fn init_on_existing_repository_succeeds() {
    let project = TestProject::new();

    project.git().init().unwrap();
    project.git().init().unwrap();

    assert!(project.path().join(".git").is_dir());
}

// =============================================================================
// Stage-and-Commit Tests
// =============================================================================

#[test]
fn explicit_paths_commit_only_those_paths() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write(".gitignore", "build/\n");
    project.write("README.md", "# Generated\n");
    project.write("stray.txt", "not staged\n");

    git.stage_and_commit(
        &[
            project.path().join(".gitignore"),
            project.path().join("README.md"),
        ],
        "TheSmiths boilerplate",
        None,
    )
    .unwrap();

    let count = run_git(project.path(), &["rev-list", "--count", "HEAD"]);
    assert_eq!(count.trim(), "1");

    let message = run_git(project.path(), &["log", "-1", "--format=%s"]);
    assert_eq!(message.trim(), "TheSmiths boilerplate");

    assert_eq!(head_tree(project.path()), vec![".gitignore", "README.md"]);

    let status = run_git(project.path(), &["status", "--porcelain"]);
    assert!(status.contains("?? stray.txt"));
}

#[test]
fn all_mode_stages_additions_and_deletions() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write("a.txt", "a\n");
    project.write("b.txt", "b\n");
    git.stage_and_commit(
        &[project.path().to_path_buf()],
        "first",
        Some(StageOptions::ALL),
    )
    .unwrap();

    std::fs::remove_file(project.path().join("a.txt")).unwrap();
    project.write("c.txt", "c\n");
    git.stage_and_commit(
        &[project.path().to_path_buf()],
        "second",
        Some(StageOptions::ALL),
    )
    .unwrap();

    assert_eq!(head_tree(project.path()), vec!["b.txt", "c.txt"]);
}

#[test]
fn unchanged_tree_refuses_to_commit() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write("a.txt", "a\n");
    git.stage_and_commit(
        &[project.path().to_path_buf()],
        "first",
        Some(StageOptions::ALL),
    )
    .unwrap();

    let err = git
        .stage_and_commit(
            &[project.path().to_path_buf()],
            "second",
            Some(StageOptions::ALL),
        )
        .unwrap_err();

    assert!(matches!(err, GitError::NothingToCommit));

    let count = run_git(project.path(), &["rev-list", "--count", "HEAD"]);
    assert_eq!(count.trim(), "1");
}

#[test]
fn commit_without_repository_fails() {
    let project = TestProject::new();

    let err = project
        .git()
        .stage_and_commit(&[project.path().to_path_buf()], "msg", None)
        .unwrap_err();

    assert!(matches!(err, GitError::NotARepo { .. }));
}

// =============================================================================
// Checkout Tests
// =============================================================================

#[test]
fn checkout_restores_tracked_content() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write("a.txt", "committed\n");
    git.stage_and_commit(&[project.path().join("a.txt")], "first", None)
        .unwrap();

    project.write("a.txt", "scribbled over\n");
    git.checkout(&TestProject::master()).unwrap();

    let content = std::fs::read_to_string(project.path().join("a.txt")).unwrap();
    assert_eq!(content, "committed\n");
}

#[test]
fn checkout_of_missing_branch_fails() {
    let project = TestProject::new();
    let git = project.git();
    // Unborn HEAD: the branch does not exist until the first commit
    git.init().unwrap();

    let err = git.checkout(&TestProject::master()).unwrap_err();
    assert!(matches!(err, GitError::BranchNotFound { .. }));
}

#[test]
fn checkout_without_repository_fails() {
    let project = TestProject::new();

    let err = project.git().checkout(&TestProject::master()).unwrap_err();
    assert!(matches!(err, GitError::NotARepo { .. }));
}

// =============================================================================
// Clean Tests
// =============================================================================

#[test]
fn clean_removes_untracked_files_and_directories() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write("tracked.txt", "kept\n");
    git.stage_and_commit(&[project.path().join("tracked.txt")], "first", None)
        .unwrap();

    project.write("junk.txt", "untracked\n");
    project.write("scratch/deep/nested.txt", "untracked\n");

    git.clean_untracked().unwrap();

    assert!(project.path().join("tracked.txt").exists());
    assert!(!project.path().join("junk.txt").exists());
    assert!(!project.path().join("scratch").exists());
}

#[test]
fn clean_preserves_ignored_content() {
    let project = TestProject::new();
    let git = project.git();
    git.init().unwrap();

    project.write(".gitignore", "build/\n");
    git.stage_and_commit(&[project.path().join(".gitignore")], "first", None)
        .unwrap();

    project.write("build/artifact.bin", "ignored\n");
    project.write("junk.txt", "untracked\n");

    git.clean_untracked().unwrap();

    assert!(project.path().join("build/artifact.bin").exists());
    assert!(!project.path().join("junk.txt").exists());
}
