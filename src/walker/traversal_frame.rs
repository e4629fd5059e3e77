use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// One level of the walk: the directory being listed under old, its
/// counterpart under new, and how deep it is below the old root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalFrame {
    pub old_dir: PathBuf,
    pub new_dir: PathBuf,
    /// Path of `old_dir` relative to the old root, empty for the root itself.
    pub relative_dir: PathBuf,
    pub depth: usize,
}

impl TraversalFrame {
    pub fn root(old_root: &Path, new_root: &Path) -> Self {
        TraversalFrame {
            old_dir: old_root.to_path_buf(),
            new_dir: new_root.to_path_buf(),
            relative_dir: PathBuf::new(),
            depth: 0,
        }
    }

    /// Frame for the subdirectory `name` of this frame's old directory.
    pub fn child(&self, name: &OsStr) -> Self {
        TraversalFrame {
            old_dir: self.old_dir.join(name),
            new_dir: self.new_dir.join(name),
            relative_dir: self.relative_dir.join(name),
            depth: self.depth + 1,
        }
    }
}
