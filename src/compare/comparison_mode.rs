use std::path::Path;

use clap::ValueEnum;
use derive_more::Display;

use super::{CompareError, checksums_equal, files_equal};

/// Strategy used to decide whether two equally sized files have the same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum ComparisonMode {
    /// Stream both files and stop at the first differing chunk
    #[default]
    #[display("bytes")]
    Bytes,
    /// Compare MD5 digests of both files
    #[display("checksum")]
    Checksum,
}

impl ComparisonMode {
    pub fn files_equal(self, left: &Path, right: &Path) -> Result<bool, CompareError> {
        match self {
            ComparisonMode::Bytes => files_equal(left, right),
            ComparisonMode::Checksum => checksums_equal(left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    fn modes_agree(
        #[values(ComparisonMode::Bytes, ComparisonMode::Checksum)] mode: ComparisonMode,
        #[values(
            (b"same".as_slice(), b"same".as_slice(), true),
            (b"same".as_slice(), b"sane".as_slice(), false),
            (b"".as_slice(), b"".as_slice(), true)
        )]
        contents: (&[u8], &[u8], bool),
    ) {
        let (left, right, expected) = contents;
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let left_path = temp_dir.path().join("left");
        let right_path = temp_dir.path().join("right");
        fs::write(&left_path, left).expect("Failed to write left file");
        fs::write(&right_path, right).expect("Failed to write right file");

        assert_eq!(mode.files_equal(&left_path, &right_path).unwrap(), expected);
    }

    #[test]
    fn default_mode_streams_bytes() {
        assert_eq!(ComparisonMode::default(), ComparisonMode::Bytes);
        assert_eq!(ComparisonMode::Checksum.to_string(), "checksum");
    }
}
