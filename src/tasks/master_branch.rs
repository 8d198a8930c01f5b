//! tasks::master_branch
//!
//! The master-branch lifecycle of a scaffolded project.
//!
//! # Pipelines
//!
//! - [`MasterBranch::init`]: repository init → seed ignore rules → seed
//!   readme → boilerplate commit
//! - [`MasterBranch::checkout`]: checkout master → clean untracked
//! - [`MasterBranch::commit_all`]: stage everything → bootstrap commit
//!
//! # Contract
//!
//! Within one pipeline, step N+1 is never started unless step N
//! succeeded. The first failure is terminal for the invocation and is
//! surfaced as a [`StepFailure`] wrapping the collaborator's error
//! unmodified. Callers serialize invocations themselves; nothing here
//! locks the underlying repository.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::paths::SeedPaths;
use crate::core::types::BranchName;
use crate::git::{StageOptions, VcsClient};
use crate::seed::Seeder;
use crate::ui::output::{self, Verbosity};

/// The primary branch of every generated project.
pub const PRIMARY_BRANCH: &str = "master";

/// Message of the initial commit holding only the seeded files.
pub const BOILERPLATE_MESSAGE: &str = "TheSmiths boilerplate";

/// Message of the commit capturing the fully generated tree.
pub const BOOTSTRAP_MESSAGE: &str = "Add autogenerated bootstrap project";

/// The pipeline step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Repository initialization
    InitRepository,
    /// Copying the ignore-rules boilerplate
    SeedIgnoreRules,
    /// Copying the readme boilerplate
    SeedReadme,
    /// Staging and committing the seeded files
    CommitBoilerplate,
    /// Checking out the primary branch
    CheckoutPrimary,
    /// Removing untracked content
    CleanUntracked,
    /// Staging everything and committing the generated tree
    CommitBootstrap,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::InitRepository => "init repository",
            Step::SeedIgnoreRules => "seed ignore rules",
            Step::SeedReadme => "seed readme",
            Step::CommitBoilerplate => "commit boilerplate",
            Step::CheckoutPrimary => "checkout primary branch",
            Step::CleanUntracked => "clean untracked",
            Step::CommitBootstrap => "commit bootstrap",
        };
        write!(f, "{}", name)
    }
}

/// A pipeline step failure.
///
/// Wraps the failing collaborator's error unmodified, tagged with the
/// step that produced it. The one error kind the task layer has.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {source}")]
pub struct StepFailure {
    step: Step,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StepFailure {
    fn new(
        step: Step,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            step,
            source: source.into(),
        }
    }

    /// The step that failed.
    pub fn step(&self) -> Step {
        self.step
    }
}

/// Injectable constants for the master-branch task.
///
/// Production callers use [`Default`]; tests override messages or the
/// branch name to observe them flowing through the pipelines.
#[derive(Debug, Clone)]
pub struct MasterBranchDefaults {
    /// The primary branch name
    pub branch: BranchName,
    /// Boilerplate commit message
    pub boilerplate_message: String,
    /// Bootstrap commit message
    pub bootstrap_message: String,
}

impl Default for MasterBranchDefaults {
    fn default() -> Self {
        Self {
            branch: BranchName::new(PRIMARY_BRANCH).expect("primary branch name is valid"),
            boilerplate_message: BOILERPLATE_MESSAGE.to_string(),
            bootstrap_message: BOOTSTRAP_MESSAGE.to_string(),
        }
    }
}

/// Brings a generated project directory under version control and
/// manages its master branch.
///
/// Generic over the two collaborators so the pipelines can be exercised
/// with recording fakes.
#[derive(Debug)]
pub struct MasterBranch<V, S> {
    paths: SeedPaths,
    defaults: MasterBranchDefaults,
    vcs: V,
    seeder: S,
    verbosity: Verbosity,
}

impl<V: VcsClient, S: Seeder> MasterBranch<V, S> {
    /// Create the task with production defaults.
    pub fn new(paths: SeedPaths, vcs: V, seeder: S) -> Self {
        Self {
            paths,
            defaults: MasterBranchDefaults::default(),
            vcs,
            seeder,
            verbosity: Verbosity::Normal,
        }
    }

    /// Override the injected constants.
    pub fn with_defaults(mut self, defaults: MasterBranchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set output verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Initialize the master branch.
    ///
    /// Brings an uninitialized directory under version control with a
    /// minimal committed baseline: repository init, the two seeded
    /// boilerplate files, one commit containing exactly those files.
    ///
    /// # Errors
    ///
    /// Fails fast on the first failing step; completed side effects
    /// (repository store, partial copies) are left in place.
    pub fn init(&self) -> Result<(), StepFailure> {
        output::progress("Initializing the master branch", self.verbosity);

        self.vcs
            .init()
            .map_err(|e| StepFailure::new(Step::InitRepository, e))?;

        self.seeder
            .copy_file(
                &self.paths.gitignore_source(),
                &self.paths.gitignore_target(),
            )
            .map_err(|e| StepFailure::new(Step::SeedIgnoreRules, e))?;

        self.seeder
            .copy_file(&self.paths.readme_source(), &self.paths.readme_target())
            .map_err(|e| StepFailure::new(Step::SeedReadme, e))?;

        let seeded: Vec<PathBuf> =
            vec![self.paths.gitignore_target(), self.paths.readme_target()];
        self.vcs
            .stage_and_commit(&seeded, &self.defaults.boilerplate_message, None)
            .map_err(|e| StepFailure::new(Step::CommitBoilerplate, e))
    }

    /// Check out the master branch.
    ///
    /// Moves the working tree to a clean checkout of the primary
    /// branch, discarding untracked artifacts left by prior scaffolding
    /// steps. Assumes [`MasterBranch::init`] has run; calling it first
    /// is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// The clean step is never attempted when checkout fails.
    pub fn checkout(&self) -> Result<(), StepFailure> {
        self.vcs
            .checkout(&self.defaults.branch)
            .map_err(|e| StepFailure::new(Step::CheckoutPrimary, e))?;

        self.vcs
            .clean_untracked()
            .map_err(|e| StepFailure::new(Step::CleanUntracked, e))
    }

    /// Commit everything on the master branch.
    ///
    /// Stages all tracked and untracked files in the target directory,
    /// including removals, and records a single bootstrap commit.
    ///
    /// # Errors
    ///
    /// A VCS layer that refuses empty commits surfaces that refusal
    /// unmodified as this operation's failure; an unchanged tree is not
    /// special-cased here.
    pub fn commit_all(&self) -> Result<(), StepFailure> {
        output::progress(
            "Adding and committing files on the master branch",
            self.verbosity,
        );

        self.vcs
            .stage_and_commit(
                &[self.paths.target_root().to_path_buf()],
                &self.defaults.bootstrap_message,
                Some(StageOptions::ALL),
            )
            .map_err(|e| StepFailure::new(Step::CommitBootstrap, e))
    }
}
