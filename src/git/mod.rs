//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. Every repository mutation
//! the scaffolding tasks perform flows through the [`VcsClient`] trait,
//! and the one real implementation, [`Git`], uses the `git2` crate
//! exclusively (no shelling out to the git CLI). No other module should
//! import `git2`.
//!
//! The trait seam exists so the task layer can be exercised with
//! recording fakes, without touching a real repository.
//!
//! # Responsibilities
//!
//! - Repository initialization with a fixed primary branch
//! - Branch checkout with a forced working-tree update
//! - Removal of untracked, non-ignored content
//! - Staging (explicit paths or everything) and committing
//!
//! # Invariants
//!
//! - Errors are normalized into typed [`GitError`] variants
//! - An empty diff is refused at commit time, never silently committed
//!
//! # Example
//!
//! ```ignore
//! use bootsmith::core::types::BranchName;
//! use bootsmith::git::{Git, StageOptions, VcsClient};
//!
//! let git = Git::new(target.to_path_buf());
//! git.init()?;
//! git.stage_and_commit(&files, "TheSmiths boilerplate", None)?;
//! git.checkout(&BranchName::new("master")?)?;
//! ```

mod client;

pub use client::{Git, GitError};

use std::path::PathBuf;

use crate::core::types::BranchName;

/// Options for the staging half of [`VcsClient::stage_and_commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageOptions {
    /// Stage every path the pathspec reaches, including deletions of
    /// tracked files (the `--all` mode).
    pub all: bool,
}

impl StageOptions {
    /// The "all paths including deletions" mode.
    pub const ALL: StageOptions = StageOptions { all: true };
}

/// The version-control capability the scaffolding tasks drive.
///
/// Each method maps to one pipeline step; implementations report
/// success or a [`GitError`] and never retry internally.
pub trait VcsClient {
    /// Initialize a repository at the client's working directory.
    fn init(&self) -> Result<(), GitError>;

    /// Move HEAD and the working tree to an existing local branch.
    fn checkout(&self, branch: &BranchName) -> Result<(), GitError>;

    /// Remove untracked files and directories from the working tree,
    /// leaving ignored content in place.
    fn clean_untracked(&self) -> Result<(), GitError>;

    /// Stage the given paths and record a single commit.
    ///
    /// `paths` are absolute; with [`StageOptions::ALL`] they act as
    /// pathspec roots under which everything (including deletions) is
    /// staged, otherwise each path is staged individually.
    fn stage_and_commit(
        &self,
        paths: &[PathBuf],
        message: &str,
        options: Option<StageOptions>,
    ) -> Result<(), GitError>;
}
