use std::fs;
use std::path::{Path, PathBuf};

use derive_more::Display;

use crate::compare::{CompareError, ComparisonMode};
use crate::walker::OldEntry;

/// How an old file relates to the file at the same relative path under new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Classification {
    /// No regular file at the same relative path under new
    Missing,
    /// Present under new but with a different size or content
    Changed,
    /// Same size and identical content
    Matched,
    /// The path under new resolves to the old file itself, through a symlink
    SameFile,
}

impl Classification {
    /// Classifies `entry` against `candidate`, checking existence, then
    /// identity, then size, then content. A file whose content cannot be read
    /// is not classified.
    pub fn of(
        entry: &OldEntry,
        candidate: &Path,
        mode: ComparisonMode,
    ) -> Result<Self, CompareError> {
        let candidate_metadata = match fs::metadata(candidate) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Ok(Classification::Missing),
        };

        if resolves_to_same_file(&entry.path, candidate) {
            return Ok(Classification::SameFile);
        }

        if entry.size != Some(candidate_metadata.len()) {
            return Ok(Classification::Changed);
        }

        if mode.files_equal(&entry.path, candidate)? {
            Ok(Classification::Matched)
        } else {
            Ok(Classification::Changed)
        }
    }
}

/// A file never matches itself. Hard links are separate directory entries
/// and still compare as two files.
fn resolves_to_same_file(old_path: &Path, candidate: &Path) -> bool {
    match (old_path.canonicalize(), candidate.canonicalize()) {
        (Ok(old_canonical), Ok(candidate_canonical)) => old_canonical == candidate_canonical,
        _ => false,
    }
}

/// Path of `entry`'s counterpart below `new_dir`.
pub(crate) fn candidate_path(new_dir: &Path, entry: &OldEntry) -> PathBuf {
    new_dir.join(&entry.name)
}
