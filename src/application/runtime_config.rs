use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use snafu::prelude::*;
use tracing::debug;

use crate::cli::Cli;
use crate::compare::ComparisonMode;
use crate::ext::BestEffortPathExt;
use crate::walker::WalkOptions;

/// Everything a run needs, after the roots passed on the command line were
/// checked.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub old_root: PathBuf,
    pub new_root: PathBuf,
    pub delete: bool,
    pub comparison_mode: ComparisonMode,
    pub colorize: bool,
}

impl RuntimeConfig {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            delete: self.delete,
            comparison_mode: self.comparison_mode,
        }
    }

    /// The old root must be an existing directory. The new root may be absent,
    /// but when present it must be a directory other than the old root.
    fn validate_roots(old_root: &Path, new_root: &Path) -> Result<(), RootValidationError> {
        let old_metadata =
            fs::metadata(old_root).context(OldRootInaccessibleSnafu { path: old_root })?;
        ensure!(
            old_metadata.is_dir(),
            OldRootNotDirectorySnafu { path: old_root }
        );

        match fs::metadata(new_root) {
            Ok(metadata) => {
                ensure!(
                    metadata.is_dir(),
                    NewRootNotDirectorySnafu { path: new_root }
                );
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("New root {} does not exist", new_root.display());
                return Ok(());
            }
            Err(e) => {
                debug!("New root {} cannot be inspected: {}", new_root.display(), e);
                return Ok(());
            }
        }

        let old_canonical = old_root
            .canonicalize()
            .context(OldRootInaccessibleSnafu { path: old_root })?;
        if let Ok(new_canonical) = new_root.canonicalize() {
            ensure!(
                old_canonical != new_canonical,
                SameRootSnafu {
                    path: old_canonical
                }
            );
        }

        Ok(())
    }
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = RootValidationError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Self::validate_roots(&cli.old, &cli.new)?;

        Ok(Self {
            old_root: cli.old,
            new_root: cli.new,
            delete: cli.delete,
            comparison_mode: cli.compare,
            colorize: cli.color.should_colorize(),
        })
    }
}

#[derive(Debug, Snafu)]
pub enum RootValidationError {
    #[snafu(display("cannot access old directory {}: {}", path.best_effort_path_display(), source))]
    OldRootInaccessible {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("old path {} is not a directory", path.best_effort_path_display()))]
    OldRootNotDirectory { path: PathBuf },
    #[snafu(display("new path {} exists but is not a directory", path.best_effort_path_display()))]
    NewRootNotDirectory { path: PathBuf },
    #[snafu(display(
        "old and new both resolve to {}, refusing to compare a directory with itself",
        path.display()
    ))]
    SameRoot { path: PathBuf },
}
