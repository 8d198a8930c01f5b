//! git::client
//!
//! Git client implementation using git2.
//!
//! # Error Handling
//!
//! git2 errors are normalized into typed failure categories:
//! - [`GitError::NotARepo`]: the target directory holds no repository
//! - [`GitError::BareRepo`]: the repository has no working tree
//! - [`GitError::BranchNotFound`]: checkout target does not exist
//! - [`GitError::NothingToCommit`]: the staged tree equals HEAD's tree
//!
//! Everything else surfaces as [`GitError::Internal`] carrying the
//! underlying git2 message.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::BranchName;
use crate::git::{StageOptions, VcsClient};

/// Committer identity used when the repository has none configured.
///
/// Freshly scaffolded environments (and test sandboxes) often lack
/// `user.name`/`user.email`; the boilerplate commit must still succeed.
const FALLBACK_NAME: &str = "bootsmith";
const FALLBACK_EMAIL: &str = "bootsmith@thesmiths.tools";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The target directory does not hold a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The directory that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Checkout target branch does not exist.
    #[error("branch not found: {branch}")]
    BranchNotFound {
        /// The missing branch
        branch: String,
    },

    /// The staged tree is identical to HEAD's tree.
    #[error("nothing to commit, working tree matches HEAD")]
    NothingToCommit,

    /// A path handed to the client lies outside the working tree.
    #[error("path is outside the working tree: {path}")]
    OutsideWorkdir {
        /// The offending path
        path: PathBuf,
    },

    /// Filesystem error while mutating the working tree.
    #[error("working tree access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// The Git client.
///
/// Bound to one working directory at construction time; every operation
/// runs against the repository found there. The struct holds no open
/// repository handle between calls, so `init` (which creates the
/// repository) and the later operations share one construction site.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    /// Create a client bound to the given working directory.
    ///
    /// The directory is not inspected here; each operation opens (or,
    /// for [`VcsClient::init`], creates) the repository on demand.
    pub fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// The working directory this client is bound to.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Open the repository at the working directory.
    fn repo(&self) -> Result<git2::Repository, GitError> {
        let repo = git2::Repository::discover(&self.workdir).map_err(|_| GitError::NotARepo {
            path: self.workdir.clone(),
        })?;
        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }
        Ok(repo)
    }

    /// Convert an absolute path into a pathspec relative to the
    /// repository's working tree. The working tree root itself maps to
    /// the match-everything spec.
    fn relative_spec(workdir: &Path, path: &Path) -> Result<String, GitError> {
        let outside = || GitError::OutsideWorkdir {
            path: path.to_path_buf(),
        };

        // Relative invocations and symlinked roots make the direct
        // prefix check miss; retry on canonical forms before giving up.
        let rel = match path.strip_prefix(workdir) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => {
                let canon_workdir = workdir.canonicalize().map_err(|_| outside())?;
                let canon_path = path.canonicalize().map_err(|_| outside())?;
                canon_path
                    .strip_prefix(&canon_workdir)
                    .map_err(|_| outside())?
                    .to_path_buf()
            }
        };

        if rel.as_os_str().is_empty() {
            return Ok("*".to_string());
        }

        rel.to_str().map(str::to_string).ok_or_else(outside)
    }

    /// Resolve HEAD's commit, or `None` when HEAD is unborn.
    fn head_commit<'r>(
        repo: &'r git2::Repository,
    ) -> Result<Option<git2::Commit<'r>>, GitError> {
        match repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Repository signature, falling back to the tool identity when the
    /// repository has no committer configured.
    fn signature(repo: &git2::Repository) -> Result<git2::Signature<'static>, GitError> {
        match repo.signature() {
            Ok(sig) => Ok(sig),
            Err(_) => Ok(git2::Signature::now(FALLBACK_NAME, FALLBACK_EMAIL)?),
        }
    }
}

impl VcsClient for Git {
    fn init(&self) -> Result<(), GitError> {
        let mut opts = git2::RepositoryInitOptions::new();
        // The generator's primary branch is fixed; do not let
        // init.defaultBranch in the ambient git config leak in.
        opts.initial_head("master");

        git2::Repository::init_opts(&self.workdir, &opts)?;
        Ok(())
    }

    fn checkout(&self, branch: &BranchName) -> Result<(), GitError> {
        let repo = self.repo()?;
        let refname = format!("refs/heads/{}", branch.as_str());

        if repo.find_reference(&refname).is_err() {
            return Err(GitError::BranchNotFound {
                branch: branch.to_string(),
            });
        }

        repo.set_head(&refname)?;

        let mut checkout = git2::build::CheckoutBuilder::new();
        checkout.force();
        repo.checkout_head(Some(&mut checkout))?;
        Ok(())
    }

    fn clean_untracked(&self) -> Result<(), GitError> {
        let repo = self.repo()?;
        let workdir = repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        // Unrecursed walk: a fully untracked directory surfaces as a
        // single `dir/` entry and is removed whole. Ignored content is
        // excluded and therefore survives, matching a clean without -x.
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = repo.statuses(Some(&mut opts))?;

        for entry in statuses.iter() {
            if !entry.status().is_wt_new() {
                continue;
            }
            let Some(rel) = entry.path() else {
                continue;
            };
            let target = workdir.join(rel);

            let removed = if target.is_dir() {
                std::fs::remove_dir_all(&target)
            } else {
                std::fs::remove_file(&target)
            };

            match removed {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(GitError::AccessError {
                        message: format!("failed to remove {}: {}", target.display(), e),
                    });
                }
            }
        }

        Ok(())
    }

    fn stage_and_commit(
        &self,
        paths: &[PathBuf],
        message: &str,
        options: Option<StageOptions>,
    ) -> Result<(), GitError> {
        let repo = self.repo()?;
        let workdir = repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();
        let mut index = repo.index()?;

        let specs = paths
            .iter()
            .map(|path| Self::relative_spec(&workdir, path))
            .collect::<Result<Vec<_>, _>>()?;

        if options.is_some_and(|o| o.all) {
            // add_all picks up new and modified files, update_all picks
            // up deletions of tracked files; together they cover --all.
            index.add_all(specs.iter(), git2::IndexAddOption::DEFAULT, None)?;
            index.update_all(specs.iter(), None)?;
        } else {
            for spec in &specs {
                index.add_path(Path::new(spec))?;
            }
        }

        index.write()?;
        let tree_id = index.write_tree()?;

        let parent = Self::head_commit(&repo)?;
        if let Some(parent) = &parent {
            if parent.tree_id() == tree_id {
                return Err(GitError::NothingToCommit);
            }
        }

        let tree = repo.find_tree(tree_id)?;
        let sig = Self::signature(&repo)?;
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;
        Ok(())
    }
}
