//! seed
//!
//! Boilerplate file seeding.
//!
//! # Design
//!
//! The scaffolding tasks never copy files themselves; they go through
//! the [`Seeder`] capability so the orchestration logic can be tested
//! with a recording fake. The real implementation, [`FsSeeder`], is a
//! plain filesystem copy.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from seeding operations.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// The file-seeding capability the scaffolding tasks drive.
pub trait Seeder {
    /// Copy one boilerplate file from `source` to `dest`, overwriting
    /// any existing file at `dest`.
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<(), SeedError>;
}

/// Filesystem-backed seeder.
#[derive(Debug, Clone, Default)]
pub struct FsSeeder;

impl Seeder for FsSeeder {
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<(), SeedError> {
        std::fs::copy(source, dest)
            .map(|_| ())
            .map_err(|err| SeedError::Copy {
                from: source.to_path_buf(),
                to: dest.to_path_buf(),
                source: err,
            })
    }
}
