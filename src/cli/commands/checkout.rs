//! checkout command - Reset the working tree to a clean checkout of master

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::GlobalConfig;
use crate::git::Git;
use crate::seed::FsSeeder;
use crate::tasks::MasterBranch;

/// Reset the working tree to a clean checkout of master.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Loaded global configuration
pub fn checkout(ctx: &Context, config: &GlobalConfig) -> Result<()> {
    let paths = super::seed_paths(ctx, config, None, false)?;
    let target = paths.target_root().to_path_buf();

    let task = MasterBranch::new(paths, Git::new(target), FsSeeder)
        .with_verbosity(ctx.verbosity());

    task.checkout()
        .context("Failed to check out the master branch")?;

    Ok(())
}
