//! core::paths
//!
//! Centralized routing of seed source and target locations.
//!
//! # Architecture
//!
//! Every file the scaffolding tasks touch is addressed through
//! [`SeedPaths`], computed once from the two filesystem roots the caller
//! supplies: the template root (where boilerplate sources live) and the
//! target root (the project directory being scaffolded).
//!
//! **Hard rule:** no code outside this module joins template or target
//! paths by hand. The task layer receives absolute paths from here and
//! passes them through unchanged, which keeps the staged file list
//! deterministic for testing.
//!
//! Neither root is validated here. The roots are trusted as given and
//! failures (missing template, unwritable target) surface from the
//! collaborators that actually touch the filesystem.
//!
//! # Template Layout
//!
//! ```text
//! <template_root>/
//!   project_files/gitignore      ignore rules seeded as .gitignore
//!   component_files/README.md    readme seeded as README.md
//! ```
//!
//! # Example
//!
//! ```
//! use bootsmith::core::paths::SeedPaths;
//! use std::path::PathBuf;
//!
//! let paths = SeedPaths::new(
//!     PathBuf::from("/templates"),
//!     PathBuf::from("/work/app"),
//! );
//!
//! assert_eq!(
//!     paths.gitignore_source(),
//!     PathBuf::from("/templates/project_files/gitignore")
//! );
//! assert_eq!(
//!     paths.gitignore_target(),
//!     PathBuf::from("/work/app/.gitignore")
//! );
//! ```

use std::path::{Path, PathBuf};

/// Ignore-rules boilerplate, relative to the template root.
pub const GITIGNORE_TEMPLATE: &str = "project_files/gitignore";

/// Readme boilerplate, relative to the template root.
pub const README_TEMPLATE: &str = "component_files/README.md";

/// Ignore-rules file name in the target project.
pub const GITIGNORE_TARGET: &str = ".gitignore";

/// Readme file name in the target project.
pub const README_TARGET: &str = "README.md";

/// Seed source and target locations for one scaffolded project.
///
/// Immutable once constructed; supplied by the caller at task
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPaths {
    /// Root directory holding boilerplate source files.
    template_root: PathBuf,

    /// Project directory being scaffolded.
    target_root: PathBuf,
}

impl SeedPaths {
    /// Create seed paths from the template and target roots.
    pub fn new(template_root: PathBuf, target_root: PathBuf) -> Self {
        Self {
            template_root,
            target_root,
        }
    }

    /// The project directory being scaffolded.
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Source of the ignore-rules boilerplate.
    pub fn gitignore_source(&self) -> PathBuf {
        self.template_root.join(GITIGNORE_TEMPLATE)
    }

    /// Source of the readme boilerplate.
    pub fn readme_source(&self) -> PathBuf {
        self.template_root.join(README_TEMPLATE)
    }

    /// Destination of the ignore-rules file in the target project.
    pub fn gitignore_target(&self) -> PathBuf {
        self.target_root.join(GITIGNORE_TARGET)
    }

    /// Destination of the readme file in the target project.
    pub fn readme_target(&self) -> PathBuf {
        self.target_root.join(README_TARGET)
    }
}
