//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the target project directory and template root
//! 2. Constructs the real collaborators (Git client, filesystem seeder)
//! 3. Delegates to the task layer and surfaces its result
//!
//! Handlers do NOT perform repository mutations directly.

mod checkout;
mod commit_all;
mod completion;
mod init;

pub use checkout::checkout;
pub use commit_all::commit_all;
pub use completion::completion;
pub use init::init;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::config::GlobalConfig;
use crate::core::paths::SeedPaths;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, config: &GlobalConfig) -> Result<()> {
    match command {
        Command::Init { template_root } => init(ctx, config, template_root),
        Command::Checkout => checkout(ctx, config),
        Command::CommitAll => commit_all(ctx, config),
        Command::Completion { shell } => completion(shell),
    }
}

/// Build the seed paths for a command.
///
/// `init` is the only pipeline that reads template sources, so only it
/// requires a template root; the other commands tolerate a missing one
/// and fall back to the target root, which their pipelines never read.
fn seed_paths(
    ctx: &Context,
    config: &GlobalConfig,
    template_flag: Option<PathBuf>,
    template_required: bool,
) -> Result<SeedPaths> {
    let target = ctx.target_root()?;

    let template_root = match config.resolve_template_root(template_flag) {
        Some(root) => root,
        None if template_required => anyhow::bail!(
            "no template root configured; pass --template-root or set \
             template_root in ~/.bootsmith/config.toml"
        ),
        None => target.clone(),
    };

    Ok(SeedPaths::new(template_root, target))
}
