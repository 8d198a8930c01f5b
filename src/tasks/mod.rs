//! tasks
//!
//! Ordered, fail-fast pipelines of version-control steps.
//!
//! # Architecture
//!
//! Each task is a short fixed pipeline of calls against two
//! collaborators: the [`crate::git::VcsClient`] capability and the
//! [`crate::seed::Seeder`] capability. Control flows strictly forward;
//! the first failing step aborts the remaining steps and its error
//! reaches the caller unmodified, tagged with the [`Step`] that failed.
//!
//! Tasks hold no state between invocations and never retry, roll back,
//! or compensate. A partially completed pipeline leaves its completed
//! side effects on disk.

mod master_branch;

pub use master_branch::{
    MasterBranch, MasterBranchDefaults, Step, StepFailure, BOILERPLATE_MESSAGE,
    BOOTSTRAP_MESSAGE, PRIMARY_BRANCH,
};
