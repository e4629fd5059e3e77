//! File content equality.
//!
//! The walker only asks for a content comparison once both files are known to
//! be regular files of the same size. Two strategies are available: a
//! streaming chunk-by-chunk comparison that stops at the first difference,
//! and a checksum comparison that digests both files completely.

mod checksum;
mod comparison_mode;
mod content;

use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;

use snafu::Snafu;

use crate::ext::BestEffortPathExt;

pub use checksum::checksums_equal;
pub use comparison_mode::ComparisonMode;
pub use content::files_equal;

/// Size of the blocks both strategies read files in.
pub const CHUNK_SIZE: usize = 4096;

/// Fills `buf` from `reader` until it is full or the stream ends, returning
/// the number of bytes read. A return value smaller than `buf.len()` means
/// end-of-stream was reached.
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[derive(Debug, Snafu)]
pub enum CompareError {
    #[snafu(display("Failed to open {} for comparison", path.best_effort_path_display()))]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {} during comparison", path.best_effort_path_display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `step` bytes per read call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn read_chunk_tops_up_short_reads() {
        let data = vec![7u8; CHUNK_SIZE + 10];
        let mut reader = Trickle {
            data: &data,
            step: 100,
        };
        let mut buf = [0u8; CHUNK_SIZE];

        assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), CHUNK_SIZE);
        assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 10);
        assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 0);
    }

    #[test]
    fn read_chunk_on_empty_stream() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        let mut buf = [0u8; CHUNK_SIZE];
        assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 0);
    }

    #[test]
    fn compare_error_display_names_the_path() {
        let error = CompareError::ReadError {
            path: PathBuf::from("/this/path/does/not/exist.bin"),
            source: io::Error::new(ErrorKind::UnexpectedEof, "gone"),
        };

        let message = error.to_string();
        assert!(message.contains("Failed to read"));
        assert!(message.contains("exist.bin"));
    }
}
