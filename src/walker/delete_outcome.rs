use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Result of a single delete or remove attempt.
///
/// Permission problems are expected when pruning trees owned by someone else
/// and are kept apart from other I/O failures.
#[derive(Debug)]
pub enum DeleteOutcome {
    Removed,
    PermissionDenied,
    Failed(io::Error),
}

impl DeleteOutcome {
    pub fn remove_file(path: &Path) -> Self {
        fs::remove_file(path).into()
    }

    /// Removes an empty directory.
    pub fn remove_dir(path: &Path) -> Self {
        fs::remove_dir(path).into()
    }
}

impl From<io::Result<()>> for DeleteOutcome {
    fn from(result: io::Result<()>) -> Self {
        match result {
            Ok(()) => DeleteOutcome::Removed,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => DeleteOutcome::PermissionDenied,
            Err(e) => DeleteOutcome::Failed(e),
        }
    }
}
