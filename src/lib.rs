//! Bootsmith - a CLI for scaffolding generated projects under version control
//!
//! Bootsmith is the version-control stage of the TheSmiths project
//! generator: it brings a freshly generated project directory under Git,
//! seeds it with boilerplate files (ignore rules, a readme), produces the
//! initial commit, and later commits the fully generated tree or resets
//! the working tree to a clean checkout of the master branch.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to tasks)
//! - [`tasks`] - Ordered, fail-fast pipelines of version-control steps
//! - [`core`] - Domain types, configuration, and path routing
//! - [`git`] - Single interface for all Git operations
//! - [`seed`] - Boilerplate file seeding
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! Bootsmith maintains the following invariants:
//!
//! 1. Within one task, step N+1 never starts unless step N succeeded
//! 2. The first failing step's error reaches the caller unmodified
//! 3. No task retries, rolls back, or compensates on failure
//! 4. All Git mutations flow through the single [`git`] doorway

pub mod cli;
pub mod core;
pub mod git;
pub mod seed;
pub mod tasks;
pub mod ui;
