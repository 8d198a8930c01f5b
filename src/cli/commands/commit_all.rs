//! commit-all command - Commit the entire generated project tree

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::GlobalConfig;
use crate::git::Git;
use crate::seed::FsSeeder;
use crate::tasks::MasterBranch;

/// Commit the entire generated project tree.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Loaded global configuration
pub fn commit_all(ctx: &Context, config: &GlobalConfig) -> Result<()> {
    let paths = super::seed_paths(ctx, config, None, false)?;
    let target = paths.target_root().to_path_buf();

    let task = MasterBranch::new(paths, Git::new(target), FsSeeder)
        .with_verbosity(ctx.verbosity());

    task.commit_all()
        .context("Failed to commit the generated project")?;

    Ok(())
}
