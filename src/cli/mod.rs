//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load global configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::tasks`] layer, which owns all repository mutations.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::GlobalConfig;
use crate::ui::output::Verbosity;

/// Execution context derived from global flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    /// Run as if started in this directory
    pub cwd: Option<PathBuf>,
    /// Minimal output
    pub quiet: bool,
    /// Verbose output
    pub debug: bool,
}

impl Context {
    /// The project directory commands operate on.
    pub fn target_root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = GlobalConfig::load().context("Failed to load configuration")?;

    let ctx = Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet || config.quiet.unwrap_or(false),
        debug: cli.debug,
    };

    commands::dispatch(cli.command, &ctx, &config)
}
