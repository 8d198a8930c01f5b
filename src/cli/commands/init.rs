//! init command - Bring the project directory under version control

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::GlobalConfig;
use crate::git::Git;
use crate::seed::FsSeeder;
use crate::tasks::MasterBranch;

/// Bring the project directory under version control.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Loaded global configuration
/// * `template_root` - Template root override from the command line
pub fn init(ctx: &Context, config: &GlobalConfig, template_root: Option<PathBuf>) -> Result<()> {
    let paths = super::seed_paths(ctx, config, template_root, true)?;
    let target = paths.target_root().to_path_buf();

    let task = MasterBranch::new(paths, Git::new(target), FsSeeder)
        .with_verbosity(ctx.verbosity());

    task.init()
        .context("Failed to initialize the master branch")?;

    Ok(())
}
