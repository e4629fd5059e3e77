use std::ffi::OsString;
use std::fs::{self, DirEntry};
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::ext::BestEffortPathExt;
use crate::walker::TraversalFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// An entry found directly below one of the directories of the old tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OldEntry {
    pub name: OsString,
    pub path: PathBuf,
    /// Path relative to the old root.
    pub relative_path: PathBuf,
    pub kind: EntryKind,
    /// Only known for files.
    pub size: Option<u64>,
}

/// The entries of one old directory, split by kind and sorted by name.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub files: Vec<OldEntry>,
    pub directories: Vec<OldEntry>,
    /// Entries that are neither files nor directories we descend into.
    pub skipped: usize,
}

impl DirectoryListing {
    pub fn read(frame: &TraversalFrame) -> io::Result<Self> {
        let mut listing = DirectoryListing::default();

        for dir_entry in fs::read_dir(&frame.old_dir)? {
            let dir_entry = dir_entry?;
            match Self::classify_entry(frame, &dir_entry) {
                Some(entry) if entry.kind == EntryKind::File => listing.files.push(entry),
                Some(entry) => listing.directories.push(entry),
                None => listing.skipped += 1,
            }
        }

        listing.files.sort_by(|a, b| a.name.cmp(&b.name));
        listing.directories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listing)
    }

    /// Symlinks count as files when they point at a regular file. Symlinked
    /// directories are never descended, so a link into the new tree cannot make
    /// the walk compare new against itself.
    fn classify_entry(frame: &TraversalFrame, dir_entry: &DirEntry) -> Option<OldEntry> {
        let path = dir_entry.path();
        let name = dir_entry.file_name();

        let file_type = match dir_entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Skipping {}: {}", path.best_effort_path_display(), e);
                return None;
            }
        };

        let (kind, size) = if file_type.is_dir() {
            (EntryKind::Directory, None)
        } else {
            // Follows symlinks, so a link to a file reports the target's size.
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => (EntryKind::File, Some(metadata.len())),
                Ok(metadata) if metadata.is_dir() => {
                    debug!("Not descending into symlinked directory {}", path.display());
                    return None;
                }
                Ok(_) => {
                    debug!("Skipping special file {}", path.display());
                    return None;
                }
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    return None;
                }
            }
        };

        Some(OldEntry {
            relative_path: frame.relative_dir.join(&name),
            name,
            path,
            kind,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn names(entries: &[OldEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| entry.name.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn listing_partitions_and_sorts_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for file in ["b.txt", "a.txt", "C.txt", "10.txt", "2.txt"] {
            fs::write(temp_dir.path().join(file), file).expect("Failed to write file");
        }
        for dir in ["zeta", "alpha", "Beta"] {
            fs::create_dir(temp_dir.path().join(dir)).expect("Failed to create directory");
        }

        let frame = TraversalFrame::root(temp_dir.path(), Path::new("new"));
        let listing = DirectoryListing::read(&frame).expect("Failed to list directory");

        assert_eq!(
            names(&listing.files),
            ["10.txt", "2.txt", "C.txt", "a.txt", "b.txt"]
        );
        assert_eq!(names(&listing.directories), ["Beta", "alpha", "zeta"]);
        assert_eq!(listing.skipped, 0);
    }

    #[test]
    fn files_carry_size_and_relative_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("sub");
        fs::create_dir(&nested).expect("Failed to create directory");
        fs::write(nested.join("c.txt"), "hello").expect("Failed to write file");

        let frame = TraversalFrame::root(temp_dir.path(), Path::new("new")).child("sub".as_ref());
        let listing = DirectoryListing::read(&frame).expect("Failed to list directory");

        let entry = &listing.files[0];
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size, Some(5));
        assert_eq!(entry.relative_path, Path::new("sub").join("c.txt"));
        assert_eq!(entry.path, nested.join("c.txt"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let frame = TraversalFrame::root(&temp_dir.path().join("absent"), Path::new("new"));

        assert!(DirectoryListing::read(&frame).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_files_are_files_and_symlinked_directories_are_skipped() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target_dir = TempDir::new().expect("Failed to create target directory");
        let target_file = target_dir.path().join("target.txt");
        fs::write(&target_file, "linked").expect("Failed to write file");

        symlink(&target_file, temp_dir.path().join("file-link")).expect("Failed to link file");
        symlink(target_dir.path(), temp_dir.path().join("dir-link")).expect("Failed to link dir");
        symlink(temp_dir.path().join("nowhere"), temp_dir.path().join("dangling"))
            .expect("Failed to create dangling link");

        let frame = TraversalFrame::root(temp_dir.path(), Path::new("new"));
        let listing = DirectoryListing::read(&frame).expect("Failed to list directory");

        assert_eq!(names(&listing.files), ["file-link"]);
        assert_eq!(listing.files[0].size, Some(6));
        assert!(listing.directories.is_empty());
        assert_eq!(listing.skipped, 2);
    }
}
