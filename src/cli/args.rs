//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bootsmith - scaffold generated projects under version control
#[derive(Parser, Debug)]
#[command(name = "bootsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if bootsmith was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bring the project directory under version control
    #[command(long_about = "Bring the project directory under version control.\n\n\
        Initializes a repository, seeds the boilerplate .gitignore and \
        README.md from the template root, and records the initial commit \
        containing exactly those two files.")]
    Init {
        /// Directory holding the boilerplate templates
        #[arg(long, value_name = "DIR")]
        template_root: Option<PathBuf>,
    },

    /// Reset the working tree to a clean checkout of master
    #[command(long_about = "Reset the working tree to a clean checkout of master.\n\n\
        Checks out the master branch, then removes untracked files and \
        directories left behind by scaffolding. Ignored files survive. \
        Requires a prior `bootsmith init`.")]
    Checkout,

    /// Commit the entire generated project tree
    #[command(name = "commit-all")]
    #[command(long_about = "Commit the entire generated project tree.\n\n\
        Stages every tracked and untracked file, including removals, and \
        records a single bootstrap commit. Fails when there is nothing \
        to commit.")]
    CommitAll,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by the completion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
